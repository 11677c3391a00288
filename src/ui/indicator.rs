//! Custom pull-to-refresh indicator
//!
//! An 80 pt overlay across the top of the refreshable content: a vertical
//! gradient backdrop whose strength follows the eased pull progress, and a
//! 4 pt linear bar
//! that is determinate while dragging and sweeps while refreshing.

use crate::app::PullState;
use crate::constants::{BACKDROP_MAX_ALPHA, BAR_HEIGHT, INDICATOR_HEIGHT};
use crate::easing::FAST_OUT_SLOW_IN;
use crate::theme::Theme;
use eframe::egui;

/// Foreground bar to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bar {
    /// Fill fraction in [0, 1], sized to the pull progress.
    Determinate(f32),
    Indeterminate,
}

/// Per-frame paint parameters, recomputed from the pull state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorPaint {
    pub progress: f32,
    /// Eased gradient strength in [0, 1]; multiplied by the 45% peak alpha
    /// when drawing.
    pub backdrop_alpha: f32,
    pub bar: Bar,
}

pub fn compute(offset: f32, trigger: f32, refreshing: bool) -> IndicatorPaint {
    let progress = (offset / trigger).clamp(0.0, 1.0);
    IndicatorPaint {
        progress,
        backdrop_alpha: FAST_OUT_SLOW_IN.transform(progress),
        bar: if refreshing {
            Bar::Indeterminate
        } else {
            Bar::Determinate(progress)
        },
    }
}

/// The strip the indicator occupies: the top of the whole refreshable
/// content, header included.
pub fn overlay_rect(content: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_size(content.min, egui::vec2(content.width(), INDICATOR_HEIGHT))
}

/// Paint the indicator over the top of `content_rect`. `time` drives the
/// indeterminate sweep.
pub fn paint(painter: &egui::Painter, content_rect: egui::Rect, pull: &PullState, theme: &Theme, time: f64) {
    let paint = compute(pull.offset(), pull.trigger_distance(), pull.is_refreshing());
    if paint.backdrop_alpha <= 0.0 && paint.bar == Bar::Determinate(0.0) {
        return;
    }

    let rect = overlay_rect(content_rect);

    // Gradient backdrop: accent at 45% alpha fading to transparent, the
    // whole thing scaled by the eased progress.
    if paint.backdrop_alpha > 0.0 {
        let top = theme
            .primary
            .gamma_multiply(BACKDROP_MAX_ALPHA * paint.backdrop_alpha);
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(rect.left_top(), top);
        mesh.colored_vertex(rect.right_top(), top);
        mesh.colored_vertex(rect.right_bottom(), egui::Color32::TRANSPARENT);
        mesh.colored_vertex(rect.left_bottom(), egui::Color32::TRANSPARENT);
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(0, 2, 3);
        painter.add(egui::Shape::mesh(mesh));
    }

    let bar_rect = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), BAR_HEIGHT));
    match paint.bar {
        Bar::Determinate(fraction) => {
            if fraction > 0.0 {
                painter.rect_filled(bar_rect, 0.0, theme.primary.gamma_multiply(0.24));
                let fill = egui::Rect::from_min_size(
                    bar_rect.min,
                    egui::vec2(bar_rect.width() * fraction, BAR_HEIGHT),
                );
                painter.rect_filled(fill, 0.0, theme.primary);
            }
        }
        Bar::Indeterminate => {
            painter.rect_filled(bar_rect, 0.0, theme.primary.gamma_multiply(0.24));
            // One sweep every 800 ms, segment covering 40% of the width.
            let span = 0.4;
            let head = ((time * 1.25).fract() as f32) * (1.0 + span);
            let tail = head - span;
            let x0 = bar_rect.left() + bar_rect.width() * tail.clamp(0.0, 1.0);
            let x1 = bar_rect.left() + bar_rect.width() * head.clamp(0.0, 1.0);
            if x1 > x0 {
                let segment = egui::Rect::from_min_max(
                    egui::pos2(x0, bar_rect.top()),
                    egui::pos2(x1, bar_rect.bottom()),
                );
                painter.rect_filled(segment, 0.0, theme.on_primary);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TRIGGER_DISTANCE;

    #[test]
    fn resting_state_paints_nothing() {
        let paint = compute(0.0, TRIGGER_DISTANCE, false);
        assert_eq!(paint.progress, 0.0);
        assert_eq!(paint.backdrop_alpha, 0.0);
        assert_eq!(paint.bar, Bar::Determinate(0.0));
    }

    #[test]
    fn negative_offset_clamps_to_zero() {
        let paint = compute(-25.0, TRIGGER_DISTANCE, false);
        assert_eq!(paint.progress, 0.0);
        assert_eq!(paint.backdrop_alpha, 0.0);
    }

    #[test]
    fn full_pull_reaches_peak_backdrop() {
        let paint = compute(TRIGGER_DISTANCE, TRIGGER_DISTANCE, false);
        assert_eq!(paint.progress, 1.0);
        // ease(1) = 1, scaled by the 45% peak at paint time.
        assert_eq!(paint.backdrop_alpha, 1.0);
        assert_eq!(paint.bar, Bar::Determinate(1.0));
    }

    #[test]
    fn overshoot_clamps_to_full() {
        let paint = compute(TRIGGER_DISTANCE * 4.0, TRIGGER_DISTANCE, false);
        assert_eq!(paint.progress, 1.0);
    }

    #[test]
    fn refreshing_selects_the_indeterminate_bar() {
        let paint = compute(TRIGGER_DISTANCE, TRIGGER_DISTANCE, true);
        assert_eq!(paint.bar, Bar::Indeterminate);
        let paint = compute(TRIGGER_DISTANCE / 3.0, TRIGGER_DISTANCE, false);
        assert!(matches!(paint.bar, Bar::Determinate(f) if f > 0.0 && f < 1.0));
    }

    #[test]
    fn overlay_hugs_the_top_of_the_content() {
        let content = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(480.0, 760.0));
        let rect = overlay_rect(content);
        assert_eq!(rect.min, content.min);
        assert_eq!(rect.width(), content.width());
        assert_eq!(rect.height(), INDICATOR_HEIGHT);
    }

    #[test]
    fn backdrop_fade_follows_the_ease_curve() {
        let half = compute(TRIGGER_DISTANCE / 2.0, TRIGGER_DISTANCE, false);
        assert_eq!(
            half.backdrop_alpha,
            crate::easing::FAST_OUT_SLOW_IN.transform(0.5)
        );
        assert!(half.backdrop_alpha > half.progress);
    }
}
