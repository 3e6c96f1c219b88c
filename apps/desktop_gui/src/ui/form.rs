//! Visible form state and the per-gesture handlers that mutate it.

use thermo_core::{passes_character_filter, ConversionError};

use crate::controller::events::{ConversionDirection, ConversionReport, FormField};
use crate::controller::session::FormCallbacks;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub text: String,
    pub is_error: bool,
}

#[derive(Debug, Default)]
pub struct FormView {
    fahrenheit: FieldState,
    celsius: FieldState,
    to_celsius_active: bool,
    to_fahrenheit_active: bool,
    status: String,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: FormField) -> &FieldState {
        match field {
            FormField::Fahrenheit => &self.fahrenheit,
            FormField::Celsius => &self.celsius,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut FieldState {
        match field {
            FormField::Fahrenheit => &mut self.fahrenheit,
            FormField::Celsius => &mut self.celsius,
        }
    }

    /// Editable text buffer for the widget layer.
    pub fn text_mut(&mut self, field: FormField) -> &mut String {
        &mut self.field_mut(field).text
    }

    pub fn is_button_active(&self, direction: ConversionDirection) -> bool {
        match direction {
            ConversionDirection::ToCelsius => self.to_celsius_active,
            ConversionDirection::ToFahrenheit => self.to_fahrenheit_active,
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Runs the character pre-filter on the source field and, when it passes,
    /// asks `callbacks` for the conversion. Both buttons go inactive afterwards
    /// whatever the outcome.
    pub fn press_convert(
        &mut self,
        direction: ConversionDirection,
        callbacks: &mut dyn FormCallbacks,
    ) {
        let source = direction.source();
        let text = self.field(source).text.clone();

        if passes_character_filter(&text) {
            let report = match direction {
                ConversionDirection::ToCelsius => callbacks.on_convert_to_celsius(&text),
                ConversionDirection::ToFahrenheit => callbacks.on_convert_to_fahrenheit(&text),
            };
            self.apply_report(direction, report);
        } else {
            tracing::debug!(
                source = source.unit().symbol(),
                "input refused before conversion"
            );
            self.flag_source_error(
                source,
                &ConversionError::EmptyOrInvalidCharacterInput.to_string(),
            );
        }

        self.deactivate_buttons();
    }

    pub fn press_quit(&mut self, callbacks: &mut dyn FormCallbacks) {
        callbacks.on_quit();
    }

    pub fn focus_gained(&mut self, field: FormField) {
        self.clear_fields();
        self.reset_field_color(field);
        let direction = field.direction();
        self.to_celsius_active = direction == ConversionDirection::ToCelsius;
        self.to_fahrenheit_active = direction == ConversionDirection::ToFahrenheit;
        self.status.clear();
    }

    pub fn focus_lost(&mut self, _field: FormField) {}

    /// Clears the destination, shows `message` and paints the source red.
    pub fn flag_source_error(&mut self, source: FormField, message: &str) {
        self.field_mut(source.other()).text.clear();
        self.status = message.to_string();
        self.field_mut(source).is_error = true;
    }

    pub fn reset_field_color(&mut self, field: FormField) {
        self.field_mut(field).is_error = false;
    }

    pub fn clear_fields(&mut self) {
        self.fahrenheit.text.clear();
        self.celsius.text.clear();
    }

    fn apply_report(&mut self, direction: ConversionDirection, report: ConversionReport) {
        self.reset_field_color(report.clear_error_on);
        match report.outcome {
            Ok(converted) => {
                self.field_mut(direction.destination()).text = converted.text;
                self.status = converted.status;
            }
            Err(err) => self.flag_source_error(direction.source(), &err.to_string()),
        }
    }

    fn deactivate_buttons(&mut self) {
        self.to_celsius_active = false;
        self.to_fahrenheit_active = false;
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
