//! Modal dialogs (greeting alert, items-file settings)

use super::App;
use crate::theme;
use crate::ui::components::modal_title;
use eframe::egui;
use std::path::PathBuf;

impl App {
    pub(crate) fn render_greeting_modal(&mut self, ctx: &egui::Context) {
        if !self.show_greeting {
            return;
        }

        let response = egui::Modal::new(egui::Id::new("greeting_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(240.0);

                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.controls.greeting()).size(16.0).strong(),
                        )
                        .selectable(false),
                    );
                    ui.add_space(theme::SPACING_MD);
                    if ui.add(theme::button_accent("OK")).clicked() {
                        self.show_greeting = false;
                    }
                });
            });

        if response.should_close() {
            self.show_greeting = false;
        }
    }

    pub(crate) fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let response = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(320.0);

                if modal_title(ui, "Settings") {
                    self.show_settings = false;
                }
                ui.add_space(4.0);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Items File").size(13.0).color(theme::ACCENT),
                    )
                    .selectable(false),
                );
                ui.add_space(2.0);

                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 4.0;
                    let browse_width = 70.0;
                    let text_width = (ui.available_width() - browse_width).max(40.0);
                    egui::Frame::new()
                        .fill(theme::BG_INPUT)
                        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
                        .corner_radius(4.0)
                        .inner_margin(egui::Margin::symmetric(6, 4))
                        .show(ui, |ui| {
                            if ui
                                .add(
                                    egui::TextEdit::singleline(&mut self.items_path_str)
                                        .frame(false)
                                        .desired_width(text_width)
                                        .font(egui::FontId::proportional(13.0)),
                                )
                                .changed()
                            {
                                self.items_path = PathBuf::from(&self.items_path_str);
                            }
                        });
                    if ui.add(theme::button("Browse")).clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("JSON", &["json"])
                            .pick_file()
                        {
                            self.items_path_str = path.to_string_lossy().to_string();
                            self.items_path = path;
                        }
                    }
                });

                ui.add_space(2.0);
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Applied the next time the list screen opens.")
                            .size(11.0)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
            });

        if response.should_close() {
            self.show_settings = false;
        }
    }
}
