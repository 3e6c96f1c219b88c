use eframe::egui;

use crate::config::Settings;

pub const TO_CELSIUS_LABEL: &str = ">>>";
pub const TO_FAHRENHEIT_LABEL: &str = "<<<";
pub const QUIT_LABEL: &str = "Quit";

const ACTIVE_BUTTON_FILL: egui::Color32 = egui::Color32::GREEN;
const ERROR_TEXT: egui::Color32 = egui::Color32::RED;
const NORMAL_TEXT: egui::Color32 = egui::Color32::BLACK;

/// Minimum height of each form row, in points.
pub const ROW_PAD_HEIGHT: f32 = 40.0;
/// Text fields are at least this many characters wide.
pub const MIN_FIELD_CHARS: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormTheme {
    pub font_size: f32,
    pub active_button_fill: egui::Color32,
    pub error_text: egui::Color32,
    pub normal_text: egui::Color32,
}

impl Default for FormTheme {
    fn default() -> Self {
        Self {
            font_size: Settings::default().font_size,
            active_button_fill: ACTIVE_BUTTON_FILL,
            error_text: ERROR_TEXT,
            normal_text: NORMAL_TEXT,
        }
    }
}

impl FormTheme {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            font_size: settings.font_size,
            ..Self::default()
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        ctx.set_visuals(egui::Visuals::light());
    }

    pub fn font(&self) -> egui::FontId {
        egui::FontId::proportional(self.font_size)
    }

    pub fn field_text_color(&self, is_error: bool) -> egui::Color32 {
        if is_error {
            self.error_text
        } else {
            self.normal_text
        }
    }

    /// `None` leaves the button on the default fill.
    pub fn button_fill(&self, active: bool) -> Option<egui::Color32> {
        active.then_some(self.active_button_fill)
    }

    pub fn min_field_width(&self) -> f32 {
        // Rough average glyph width for the proportional font.
        self.font_size * 0.6 * MIN_FIELD_CHARS
    }
}
