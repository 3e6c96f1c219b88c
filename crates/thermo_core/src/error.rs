use thiserror::Error;

/// Every way a submitted temperature can be refused. The `Display` text is
/// exactly what the form shows in its status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Input Error")]
    EmptyOrInvalidCharacterInput,
    #[error("Number Format Error")]
    NumberFormat,
    #[error("Temperature < Absolute Zero Error")]
    BelowAbsoluteZero,
}

impl ConversionError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyOrInvalidCharacterInput => "empty_or_invalid_character_input",
            Self::NumberFormat => "number_format",
            Self::BelowAbsoluteZero => "below_absolute_zero",
        }
    }
}
