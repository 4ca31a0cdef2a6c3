//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme;
use eframe::egui;
use std::ops::RangeInclusive;

/// Section heading label (accent colored, non-selectable)
pub fn section_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(egui::RichText::new(text).size(13.0).color(theme::ACCENT))
            .selectable(false),
    );
    ui.add_space(2.0);
}

/// Minus/plus stepper clamped to `range`. Returns true if the value changed.
pub fn stepper(ui: &mut egui::Ui, value: &mut i32, range: RangeInclusive<i32>) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;

        let minus = ui.add_enabled(
            *value > *range.start(),
            egui::Button::new(egui_phosphor::regular::MINUS).min_size(egui::vec2(26.0, 26.0)),
        );
        if minus.clicked() {
            *value -= 1;
            changed = true;
        }

        let plus = ui.add_enabled(
            *value < *range.end(),
            egui::Button::new(egui_phosphor::regular::PLUS).min_size(egui::vec2(26.0, 26.0)),
        );
        if plus.clicked() {
            *value += 1;
            changed = true;
        }
    });

    changed
}

/// Modal title row with a close button on the right. Returns true if
/// the close button was clicked.
pub fn modal_title(ui: &mut egui::Ui, title: &str) -> bool {
    let mut close_clicked = false;

    ui.horizontal(|ui| {
        ui.add(egui::Label::new(egui::RichText::new(title).size(16.0).strong()).selectable(false));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let close_size = 24.0;
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(close_size, close_size), egui::Sense::click());
            let close_color = if response.hovered() {
                ui.painter().rect_filled(rect, 4.0, theme::BG_SURFACE);
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                theme::STATUS_ERROR
            } else {
                theme::TEXT_DIM
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                egui_phosphor::regular::X,
                egui::FontId::proportional(16.0),
                close_color,
            );
            if response.clicked() {
                close_clicked = true;
            }
        });
    });

    close_clicked
}
