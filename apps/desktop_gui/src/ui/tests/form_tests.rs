use super::*;
use crate::controller::events::Converted;

/// Callbacks that record what the view asked for and answer with a fixed
/// report.
#[derive(Default)]
struct ScriptedCallbacks {
    requests: Vec<(ConversionDirection, String)>,
    quits: u32,
    answer: Option<Result<Converted, ConversionError>>,
}

impl ScriptedCallbacks {
    fn answering(answer: Result<Converted, ConversionError>) -> Self {
        Self {
            answer: Some(answer),
            ..Self::default()
        }
    }

    fn report(&mut self, direction: ConversionDirection, text: &str) -> ConversionReport {
        self.requests.push((direction, text.to_string()));
        ConversionReport {
            clear_error_on: direction.destination(),
            outcome: self
                .answer
                .clone()
                .unwrap_or(Err(ConversionError::NumberFormat)),
        }
    }
}

impl FormCallbacks for ScriptedCallbacks {
    fn on_convert_to_celsius(&mut self, text: &str) -> ConversionReport {
        self.report(ConversionDirection::ToCelsius, text)
    }

    fn on_convert_to_fahrenheit(&mut self, text: &str) -> ConversionReport {
        self.report(ConversionDirection::ToFahrenheit, text)
    }

    fn on_quit(&mut self) {
        self.quits += 1;
    }
}

fn filled(field: FormField, text: &str) -> FormView {
    let mut view = FormView::new();
    view.focus_gained(field);
    view.text_mut(field).push_str(text);
    view
}

#[test]
fn empty_input_never_reaches_callbacks() {
    let mut view = filled(FormField::Fahrenheit, "");
    let mut callbacks = ScriptedCallbacks::default();

    view.press_convert(ConversionDirection::ToCelsius, &mut callbacks);

    assert!(callbacks.requests.is_empty());
    assert_eq!(view.status(), "Input Error");
    assert!(view.field(FormField::Fahrenheit).is_error);
}

#[test]
fn invalid_characters_never_reach_callbacks_in_either_direction() {
    for direction in [ConversionDirection::ToCelsius, ConversionDirection::ToFahrenheit] {
        let mut view = filled(direction.source(), "12a3");
        view.text_mut(direction.destination()).push_str("old");
        let mut callbacks = ScriptedCallbacks::default();

        view.press_convert(direction, &mut callbacks);

        assert!(callbacks.requests.is_empty());
        assert_eq!(view.status(), "Input Error");
        assert!(view.field(direction.source()).is_error);
        assert_eq!(view.field(direction.destination()).text, "");
    }
}

#[test]
fn filtered_text_is_forwarded_verbatim() {
    let mut view = filled(FormField::Celsius, "-40");
    let mut callbacks = ScriptedCallbacks::answering(Ok(Converted {
        text: "-40.0".into(),
        status: "Converted to Fahrenheit".into(),
    }));

    view.press_convert(ConversionDirection::ToFahrenheit, &mut callbacks);

    assert_eq!(
        callbacks.requests,
        vec![(ConversionDirection::ToFahrenheit, "-40".to_string())]
    );
    assert_eq!(view.field(FormField::Fahrenheit).text, "-40.0");
    assert_eq!(view.status(), "Converted to Fahrenheit");
}

#[test]
fn reported_error_flags_source_field() {
    let mut view = filled(FormField::Fahrenheit, "-1000");
    let mut callbacks = ScriptedCallbacks::answering(Err(ConversionError::BelowAbsoluteZero));

    view.press_convert(ConversionDirection::ToCelsius, &mut callbacks);

    assert!(view.field(FormField::Fahrenheit).is_error);
    assert!(!view.field(FormField::Celsius).is_error);
    assert_eq!(view.field(FormField::Celsius).text, "");
    assert_eq!(view.status(), "Temperature < Absolute Zero Error");
}

#[test]
fn focus_on_fahrenheit_clears_everything_and_activates_to_celsius() {
    let mut view = FormView::new();
    view.text_mut(FormField::Fahrenheit).push_str("1");
    view.text_mut(FormField::Celsius).push_str("2");
    view.flag_source_error(FormField::Fahrenheit, "Number Format Error");

    view.focus_gained(FormField::Fahrenheit);

    assert_eq!(view.field(FormField::Fahrenheit), &FieldState::default());
    assert_eq!(view.field(FormField::Celsius).text, "");
    assert_eq!(view.status(), "");
    assert!(view.is_button_active(ConversionDirection::ToCelsius));
    assert!(!view.is_button_active(ConversionDirection::ToFahrenheit));
}

#[test]
fn focus_on_celsius_activates_to_fahrenheit_only() {
    let mut view = filled(FormField::Fahrenheit, "5");

    view.focus_gained(FormField::Celsius);

    assert!(view.is_button_active(ConversionDirection::ToFahrenheit));
    assert!(!view.is_button_active(ConversionDirection::ToCelsius));
    assert_eq!(view.field(FormField::Fahrenheit).text, "");
}

#[test]
fn focus_lost_changes_nothing() {
    let mut view = filled(FormField::Celsius, "7");
    view.focus_lost(FormField::Celsius);

    assert_eq!(view.field(FormField::Celsius).text, "7");
    assert!(view.is_button_active(ConversionDirection::ToFahrenheit));
}

#[test]
fn reset_field_color_keeps_text() {
    let mut view = filled(FormField::Celsius, "oops");
    view.flag_source_error(FormField::Celsius, "Input Error");

    view.reset_field_color(FormField::Celsius);

    assert_eq!(
        view.field(FormField::Celsius),
        &FieldState {
            text: "oops".into(),
            is_error: false,
        }
    );
}

#[test]
fn quit_is_delegated_without_touching_state() {
    let mut view = filled(FormField::Fahrenheit, "3");
    let mut callbacks = ScriptedCallbacks::default();

    view.press_quit(&mut callbacks);

    assert_eq!(callbacks.quits, 1);
    assert_eq!(view.field(FormField::Fahrenheit).text, "3");
    assert!(view.is_button_active(ConversionDirection::ToCelsius));
}
