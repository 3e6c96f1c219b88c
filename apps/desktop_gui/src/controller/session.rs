//! Session controller: owns the form view and answers its conversion and
//! quit requests.

use thermo_core::{convert_input, format_temperature, TemperatureUnit};

use crate::controller::events::{ConversionReport, Converted, FormEvent, FormField};
use crate::controller::orchestration::dispatch_form_event;
use crate::ui::form::FormView;

/// Ends the session. The desktop app closes its window; tests record the call.
pub trait ShutdownHandle {
    fn request_shutdown(&mut self);
}

/// The requests a form view may make of whoever drives it.
pub trait FormCallbacks {
    fn on_convert_to_celsius(&mut self, text: &str) -> ConversionReport;
    fn on_convert_to_fahrenheit(&mut self, text: &str) -> ConversionReport;
    fn on_quit(&mut self);
}

pub struct ConversionService<S> {
    shutdown: S,
}

impl<S: ShutdownHandle> ConversionService<S> {
    pub fn new(shutdown: S) -> Self {
        Self { shutdown }
    }

    fn convert_from(&self, text: &str, from: FormField) -> ConversionReport {
        let destination = from.other();
        let outcome = convert_input(text, from.unit()).map(|converted| Converted {
            text: format_temperature(converted.value),
            status: converted_status(converted.unit),
        });

        if let Err(err) = &outcome {
            tracing::debug!(
                source = from.unit().symbol(),
                error = err.kind(),
                "conversion rejected"
            );
        }

        ConversionReport {
            clear_error_on: destination,
            outcome,
        }
    }
}

fn converted_status(unit: TemperatureUnit) -> String {
    format!("Converted to {}", unit.name())
}

impl<S: ShutdownHandle> FormCallbacks for ConversionService<S> {
    fn on_convert_to_celsius(&mut self, text: &str) -> ConversionReport {
        self.convert_from(text, FormField::Fahrenheit)
    }

    fn on_convert_to_fahrenheit(&mut self, text: &str) -> ConversionReport {
        self.convert_from(text, FormField::Celsius)
    }

    fn on_quit(&mut self) {
        tracing::info!("quit requested");
        self.shutdown.request_shutdown();
    }
}

/// Owns the view outright; the view only ever sees the service through
/// `FormCallbacks`.
pub struct SessionController<S> {
    view: FormView,
    service: ConversionService<S>,
}

impl<S: ShutdownHandle> SessionController<S> {
    pub fn new(shutdown: S) -> Self {
        Self {
            view: FormView::new(),
            service: ConversionService::new(shutdown),
        }
    }

    pub fn view(&self) -> &FormView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut FormView {
        &mut self.view
    }

    pub fn handle(&mut self, event: FormEvent) {
        dispatch_form_event(&mut self.view, &mut self.service, event);
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
