//! UI layer: form state, egui app shell and theme.

pub mod app;
pub mod form;
pub mod theme;

pub use app::TemperatureApp;
pub use theme::FormTheme;
