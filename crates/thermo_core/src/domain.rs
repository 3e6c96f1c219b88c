pub const FAHRENHEIT_OFFSET: f64 = 32.0;
pub const CELSIUS_TO_FAHRENHEIT_RATIO: f64 = 5.0 / 9.0;
/// Lowest physically meaningful temperature, in degrees Celsius.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

pub fn fahrenheit_to_celsius(degrees_f: f64) -> f64 {
    (degrees_f - FAHRENHEIT_OFFSET) * CELSIUS_TO_FAHRENHEIT_RATIO
}

pub fn celsius_to_fahrenheit(degrees_c: f64) -> f64 {
    degrees_c / CELSIUS_TO_FAHRENHEIT_RATIO + FAHRENHEIT_OFFSET
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    pub fn other(self) -> Self {
        match self {
            Self::Fahrenheit => Self::Celsius,
            Self::Celsius => Self::Fahrenheit,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Fahrenheit => "F",
            Self::Celsius => "C",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Fahrenheit => "Degrees F",
            Self::Celsius => "Degrees C",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Fahrenheit => "Fahrenheit",
            Self::Celsius => "Celsius",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    pub value: f64,
    pub unit: TemperatureUnit,
}

impl Temperature {
    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    pub fn to_celsius(self) -> f64 {
        match self.unit {
            TemperatureUnit::Celsius => self.value,
            TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(self.value),
        }
    }

    pub fn converted_to(self, unit: TemperatureUnit) -> Self {
        let value = match (self.unit, unit) {
            (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => {
                fahrenheit_to_celsius(self.value)
            }
            (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => {
                celsius_to_fahrenheit(self.value)
            }
            _ => self.value,
        };
        Self { value, unit }
    }

    /// True when the Celsius-domain value is at or above absolute zero.
    /// NaN is never physical.
    pub fn is_physical(self) -> bool {
        self.to_celsius() >= ABSOLUTE_ZERO_CELSIUS
    }
}
