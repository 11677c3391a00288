//! Theme tokens for the demo screen
//!
//! The palette and type scale are carried in an explicit `Theme` value that
//! is built in `main` and handed to the app at construction, rather than
//! referenced as module-level globals.

use egui::Color32;

/// Color and typography tokens consumed by the screen and the indicator.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color: indicator gradient and the determinate bar.
    pub primary: Color32,
    /// Indeterminate bar color, readable on top of the gradient.
    pub on_primary: Color32,
    pub background: Color32,
    pub on_surface: Color32,
    pub title_color: Color32,
    pub subtitle_color: Color32,

    pub header_size: f32,
    pub row_title_size: f32,
    pub row_subtitle_size: f32,
}

impl Default for Theme {
    /// Material 3 light scheme, matching the demo's original palette.
    fn default() -> Self {
        Self {
            primary: Color32::from_rgb(0x67, 0x50, 0xA4),
            on_primary: Color32::WHITE,
            background: Color32::from_rgb(0xFF, 0xFB, 0xFE),
            on_surface: Color32::from_rgb(0x1C, 0x1B, 0x1F),
            title_color: Color32::BLACK,
            subtitle_color: Color32::GRAY,
            header_size: 22.0,
            row_title_size: 24.0,
            row_subtitle_size: 16.0,
        }
    }
}

impl Theme {
    /// Divider color: on-surface at 8% alpha.
    pub fn divider_color(&self) -> Color32 {
        self.on_surface.gamma_multiply(0.08)
    }

    /// Install egui visuals matching this theme.
    pub fn apply_visuals(&self, ctx: &egui::Context) {
        ctx.set_theme(egui::Theme::Light);
        ctx.set_visuals(egui::Visuals {
            dark_mode: false,
            panel_fill: self.background,
            window_fill: self.background,
            extreme_bg_color: self.background,
            hyperlink_color: self.primary,
            override_text_color: Some(self.on_surface),
            ..egui::Visuals::light()
        });

        ctx.style_mut(|style| {
            style.interaction.selectable_labels = false;
            style.spacing.item_spacing = egui::vec2(8.0, 4.0);
            style.spacing.scroll.bar_width = 6.0;
            style.spacing.scroll.floating = false;
        });
    }
}
