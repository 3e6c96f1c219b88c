//! Dispatch from form gestures to the view's per-gesture handlers.

use crate::controller::events::{ConversionDirection, FormEvent};
use crate::controller::session::FormCallbacks;
use crate::ui::form::FormView;

pub fn dispatch_form_event(
    view: &mut FormView,
    callbacks: &mut dyn FormCallbacks,
    event: FormEvent,
) {
    tracing::debug!(event = event.name(), "dispatching form event");

    match event {
        FormEvent::ConvertToCelsiusPressed => {
            view.press_convert(ConversionDirection::ToCelsius, callbacks)
        }
        FormEvent::ConvertToFahrenheitPressed => {
            view.press_convert(ConversionDirection::ToFahrenheit, callbacks)
        }
        FormEvent::QuitPressed => view.press_quit(callbacks),
        FormEvent::FocusGained(field) => view.focus_gained(field),
        FormEvent::FocusLost(field) => view.focus_lost(field),
    }
}
