//! List screen - rows from the JSON-or-fallback item store

use super::App;
use crate::theme;
use eframe::egui;

const ROW_HEIGHT: f32 = 29.0;

impl App {
    pub(crate) fn render_list_view(&mut self, ui: &mut egui::Ui) {
        // Items are loaded once when the screen opens; an empty slice
        // here means the file parsed to a valid empty array.
        let items = self.items.as_deref().unwrap_or(&[]);

        ui.add_space(theme::SPACING_SM);
        ui.add(
            egui::Label::new(
                egui::RichText::new(format!(
                    "{} item{}",
                    items.len(),
                    if items.len() == 1 { "" } else { "s" }
                ))
                .size(12.0)
                .color(theme::TEXT_DIM),
            )
            .selectable(false),
        );
        ui.add_space(theme::SPACING_SM);

        if items.is_empty() {
            ui.add_space(theme::SPACING_XL);
            ui.vertical_centered(|ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("No items to show").color(theme::TEXT_MUTED),
                    )
                    .selectable(false),
                );
            });
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, ROW_HEIGHT, items.len(), |ui, range| {
                for item in &items[range] {
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(ui.available_width(), ROW_HEIGHT),
                        egui::Sense::hover(),
                    );
                    if !ui.is_rect_visible(rect) {
                        continue;
                    }

                    if response.hovered() {
                        ui.painter()
                            .rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_HOVER);
                    }

                    ui.painter().text(
                        egui::pos2(rect.left() + 10.0, rect.center().y),
                        egui::Align2::LEFT_CENTER,
                        &item.title,
                        egui::FontId::proportional(14.0),
                        theme::TEXT_SECONDARY,
                    );

                    // Hairline separator under each row
                    ui.painter().hline(
                        rect.x_range(),
                        rect.bottom(),
                        egui::Stroke::new(1.0, theme::BORDER_SUBTLE),
                    );
                }
            });
    }
}
