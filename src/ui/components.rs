//! Reusable UI components for the demo screen

use crate::theme::Theme;
use crate::types::ListItem;
use eframe::egui;

pub const AVATAR_SIZE: f32 = 70.0;
const ROW_PADDING: f32 = 10.0;

/// Screen header: bold title with generous padding.
pub fn header(ui: &mut egui::Ui, theme: &Theme) {
    egui::Frame::new()
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Custom Swipe to refresh UX")
                        .size(theme.header_size)
                        .strong()
                        .color(theme.title_color),
                )
                .selectable(false),
            );
        });
}

/// One list row: circular avatar, then title and subtitle stacked.
pub fn list_row(ui: &mut egui::Ui, item: &ListItem, avatar: &egui::TextureHandle, theme: &Theme) {
    egui::Frame::new()
        .inner_margin(egui::Margin::same(ROW_PADDING as i8))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.image(egui::load::SizedTexture::new(
                    avatar.id(),
                    egui::vec2(AVATAR_SIZE, AVATAR_SIZE),
                ));
                ui.add_space(10.0);
                ui.vertical(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(&item.title)
                                .size(theme.row_title_size)
                                .strong()
                                .color(theme.title_color),
                        )
                        .selectable(false),
                    );
                    ui.add_space(4.0);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(&item.subtitle)
                                .size(theme.row_subtitle_size)
                                .color(theme.subtitle_color),
                        )
                        .selectable(false),
                    );
                });
            });
        });
}

/// Dividers sit between consecutive rows only: never after the last row.
pub fn needs_divider(index: usize, len: usize) -> bool {
    index + 1 < len
}

/// Thin full-width divider with horizontal padding.
pub fn list_divider(ui: &mut egui::Ui, theme: &Theme) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 1.0),
        egui::Sense::hover(),
    );
    let line = egui::Rect::from_min_max(
        egui::pos2(rect.left() + 14.0, rect.top()),
        egui::pos2(rect.right() - 14.0, rect.bottom()),
    );
    ui.painter().rect_filled(line, 0.0, theme.divider_color());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::demo_items;

    #[test]
    fn ten_rows_get_nine_dividers_none_trailing() {
        let len = demo_items().len();
        assert_eq!(len, 10);
        let dividers = (0..len).filter(|&i| needs_divider(i, len)).count();
        assert_eq!(dividers, 9);
        assert!(!needs_divider(len - 1, len));
    }

    #[test]
    fn short_lists_get_no_divider() {
        assert!(!needs_divider(0, 1));
        assert_eq!((0..0).filter(|&i| needs_divider(i, 0)).count(), 0);
    }
}
