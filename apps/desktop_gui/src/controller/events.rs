//! Form gestures and the reports the controller hands back to the view.

use thermo_core::{ConversionError, TemperatureUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Fahrenheit,
    Celsius,
}

impl FormField {
    pub fn unit(self) -> TemperatureUnit {
        match self {
            Self::Fahrenheit => TemperatureUnit::Fahrenheit,
            Self::Celsius => TemperatureUnit::Celsius,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Fahrenheit => Self::Celsius,
            Self::Celsius => Self::Fahrenheit,
        }
    }

    /// The conversion a focused field implies.
    pub fn direction(self) -> ConversionDirection {
        match self {
            Self::Fahrenheit => ConversionDirection::ToCelsius,
            Self::Celsius => ConversionDirection::ToFahrenheit,
        }
    }

    pub fn id_salt(self) -> &'static str {
        match self {
            Self::Fahrenheit => "fahrenheit_field",
            Self::Celsius => "celsius_field",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionDirection {
    ToCelsius,
    ToFahrenheit,
}

impl ConversionDirection {
    pub fn source(self) -> FormField {
        match self {
            Self::ToCelsius => FormField::Fahrenheit,
            Self::ToFahrenheit => FormField::Celsius,
        }
    }

    pub fn destination(self) -> FormField {
        self.source().other()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    ConvertToCelsiusPressed,
    ConvertToFahrenheitPressed,
    QuitPressed,
    FocusGained(FormField),
    FocusLost(FormField),
}

impl FormEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConvertToCelsiusPressed => "convert_to_celsius",
            Self::ConvertToFahrenheitPressed => "convert_to_fahrenheit",
            Self::QuitPressed => "quit",
            Self::FocusGained(_) => "focus_gained",
            Self::FocusLost(_) => "focus_lost",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Converted {
    pub text: String,
    pub status: String,
}

/// What the view must apply after a conversion request: clear the error
/// color on `clear_error_on`, then show either the result or the error.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub clear_error_on: FormField,
    pub outcome: Result<Converted, ConversionError>,
}
