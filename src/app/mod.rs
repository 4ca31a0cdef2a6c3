//! App module - contains the main application state and logic

mod controls;
mod list;
mod modals;

use crate::constants::{FRUITS, PROGRESS_STEP};
use crate::items::ListItem;
use crate::settings::Settings;
use crate::theme;
use eframe::egui;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Quantity stepper bounds.
pub const QUANTITY_RANGE: RangeInclusive<i32> = 1..=10;

/// Which screen is currently shown.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum View {
    Controls,
    List,
}

/// Form values for the controls screen. All state is ephemeral view
/// state; nothing here is persisted.
pub struct ControlsState {
    pub name: String,
    pub feature_enabled: bool,
    pub slider_value: f64,
    pub quantity: i32,
    pub selected_fruit: &'static str,
    pub progress: f32,
    pub reminder_date: chrono::NaiveDate,
    pub reminder_hour: u32,
    pub reminder_minute: u32,
}

impl Default for ControlsState {
    fn default() -> Self {
        use chrono::Timelike;
        let now = chrono::Local::now();
        Self {
            name: String::new(),
            feature_enabled: false,
            slider_value: 50.0,
            quantity: 1,
            selected_fruit: FRUITS[0],
            progress: 0.3,
            reminder_date: now.date_naive(),
            reminder_hour: now.hour(),
            reminder_minute: now.minute(),
        }
    }
}

impl ControlsState {
    pub fn advance_progress(&mut self) {
        self.progress = (self.progress + PROGRESS_STEP).min(1.0);
    }

    pub fn regress_progress(&mut self) {
        self.progress = (self.progress - PROGRESS_STEP).max(0.0);
    }

    /// Text shown in the greeting modal.
    pub fn greeting(&self) -> String {
        if self.name.is_empty() {
            "Hello, there!".to_string()
        } else {
            format!("Hello, {}!", self.name)
        }
    }
}

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) view: View,
    pub(crate) controls: ControlsState,
    // Loaded when the list screen is opened, dropped when it closes
    pub(crate) items: Option<Vec<ListItem>>,
    pub(crate) items_path: PathBuf,
    pub(crate) items_path_str: String,
    // Modals
    pub(crate) show_greeting: bool,
    pub(crate) show_settings: bool,
    // Window geometry tracking for saving on exit
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let items_path = settings.items_path_or_default(&data_dir);

        Self {
            view: View::Controls,
            controls: ControlsState::default(),
            items: None,
            items_path: items_path.clone(),
            items_path_str: items_path.to_string_lossy().to_string(),
            show_greeting: false,
            show_settings: false,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    /// Open the list screen, loading its items eagerly.
    pub fn open_list(&mut self) {
        self.items = Some(crate::items::load_items(&self.items_path));
        self.view = View::List;
    }

    /// Return to the controls screen, dropping the loaded items.
    pub fn close_list(&mut self) {
        self.items = None;
        self.view = View::Controls;
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            items_path: Some(self.items_path_str.clone()),
        };
        settings.save(&self.data_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_advances_in_steps_and_saturates() {
        let mut state = ControlsState::default();
        assert_eq!(state.progress, 0.3);

        state.advance_progress();
        assert!((state.progress - 0.4).abs() < 1e-6);

        for _ in 0..20 {
            state.advance_progress();
        }
        assert_eq!(state.progress, 1.0);
    }

    #[test]
    fn progress_regresses_and_saturates_at_zero() {
        let mut state = ControlsState::default();
        for _ in 0..20 {
            state.regress_progress();
        }
        assert_eq!(state.progress, 0.0);
    }

    #[test]
    fn greeting_falls_back_when_name_empty() {
        let mut state = ControlsState::default();
        assert_eq!(state.greeting(), "Hello, there!");

        state.name = "Ada".to_string();
        assert_eq!(state.greeting(), "Hello, Ada!");
    }

    #[test]
    fn defaults_match_initial_screen() {
        let state = ControlsState::default();
        assert_eq!(state.slider_value, 50.0);
        assert_eq!(state.quantity, 1);
        assert_eq!(state.selected_fruit, "Apple");
        assert!(!state.feature_enabled);
        assert!(QUANTITY_RANGE.contains(&state.quantity));
    }
}
