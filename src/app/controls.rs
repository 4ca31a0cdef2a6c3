//! Controls screen - sectioned showcase of the standard form widgets

use super::{App, QUANTITY_RANGE};
use crate::constants::FRUITS;
use crate::theme;
use crate::ui::components::{section_label, stepper};
use eframe::egui;

impl App {
    pub(crate) fn render_controls_view(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(theme::SPACING_MD);

                // — Text & Input —
                theme::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    section_label(ui, "Text & Input");

                    egui::Frame::new()
                        .fill(theme::BG_INPUT)
                        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
                        .corner_radius(4.0)
                        .inner_margin(egui::Margin::symmetric(6, 4))
                        .show(ui, |ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.controls.name)
                                    .frame(false)
                                    .hint_text("Enter your name")
                                    .desired_width(ui.available_width()),
                            );
                        });

                    ui.add_space(theme::SPACING_SM);
                    if ui.add(theme::button_accent("Say Hello")).clicked() {
                        self.show_greeting = true;
                    }
                });

                ui.add_space(theme::SPACING_MD);

                // — Toggles & Pickers —
                theme::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    section_label(ui, "Toggles & Pickers");

                    ui.checkbox(&mut self.controls.feature_enabled, "Enable Feature");

                    ui.add_space(theme::SPACING_SM);
                    ui.add(
                        egui::Slider::new(&mut self.controls.slider_value, 0.0..=100.0)
                            .step_by(1.0)
                            .integer(),
                    );

                    ui.add_space(theme::SPACING_SM);
                    ui.horizontal(|ui| {
                        ui.label(format!("Quantity: {}", self.controls.quantity));
                        ui.add_space(theme::SPACING_SM);
                        stepper(ui, &mut self.controls.quantity, QUANTITY_RANGE);
                    });

                    ui.add_space(theme::SPACING_SM);
                    ui.horizontal(|ui| {
                        ui.label("Favorite Fruit");
                        egui::ComboBox::from_id_salt("fruit_picker")
                            .selected_text(self.controls.selected_fruit)
                            .show_ui(ui, |ui| {
                                for fruit in FRUITS {
                                    ui.selectable_value(
                                        &mut self.controls.selected_fruit,
                                        fruit,
                                        fruit,
                                    );
                                }
                            });
                    });
                });

                ui.add_space(theme::SPACING_MD);

                // — Feedback —
                theme::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    section_label(ui, "Feedback");

                    ui.add(
                        egui::ProgressBar::new(self.controls.progress)
                            .show_percentage()
                            .fill(theme::ACCENT),
                    );

                    ui.add_space(theme::SPACING_SM);
                    ui.horizontal(|ui| {
                        if ui.add(theme::button("Advance Progress")).clicked() {
                            self.controls.advance_progress();
                        }
                        if ui.add(theme::button("Regress Progress")).clicked() {
                            self.controls.regress_progress();
                        }
                    });

                    ui.add_space(theme::SPACING_SM);
                    ui.horizontal(|ui| {
                        ui.label("Reminder");
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut self.controls.reminder_date)
                                .id_salt("reminder_date"),
                        );
                        ui.add(
                            egui::DragValue::new(&mut self.controls.reminder_hour)
                                .range(0..=23)
                                .custom_formatter(|v, _| format!("{:02}", v as u32)),
                        );
                        ui.label(":");
                        ui.add(
                            egui::DragValue::new(&mut self.controls.reminder_minute)
                                .range(0..=59)
                                .custom_formatter(|v, _| format!("{:02}", v as u32)),
                        );
                    });
                });

                ui.add_space(theme::SPACING_MD);

                // — Images & Lists —
                theme::card_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    section_label(ui, "Images & Lists");

                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(egui_phosphor::regular::LIGHTNING)
                                    .size(18.0)
                                    .color(theme::ACCENT_LIGHT),
                            )
                            .selectable(false),
                        );
                        ui.label("Icon Font Symbol");
                    });

                    ui.add_space(theme::SPACING_SM);
                    if ui.add(theme::button("Go to List Screen")).clicked() {
                        self.open_list();
                    }
                });

                ui.add_space(theme::SPACING_MD);
            });
    }
}
