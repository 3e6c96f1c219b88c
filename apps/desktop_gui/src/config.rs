use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "temperature_gui.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub font_size: f32,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "degF <==> degC".into(),
            window_width: 500.0,
            window_height: 250.0,
            font_size: 18.0,
            log_filter: "info".into(),
        }
    }
}

/// Command-line values that win over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub window_width: Option<f32>,
    pub window_height: Option<f32>,
    pub font_size: Option<f32>,
    pub log_filter: Option<String>,
}

impl Settings {
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(v) = overrides.window_width {
            self.window_width = v;
        }
        if let Some(v) = overrides.window_height {
            self.window_height = v;
        }
        if let Some(v) = overrides.font_size {
            self.font_size = v;
        }
        if let Some(v) = overrides.log_filter {
            self.log_filter = v;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, value) in [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("font_size", self.font_size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                bail!("{name} must be a positive number, got {value}");
            }
        }
        if self.window_title.trim().is_empty() {
            bail!("window_title must not be empty");
        }
        Ok(())
    }
}

pub fn parse_settings(raw: &str) -> anyhow::Result<Settings> {
    toml::from_str(raw).context("invalid settings file")
}

/// Reads `explicit` if given (it must exist), otherwise the default file in
/// the working directory when present, otherwise built-in defaults.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<Settings> {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    match fs::read_to_string(&path) {
        Ok(raw) => parse_settings(&raw).with_context(|| format!("loading {}", path.display())),
        Err(err) if err.kind() == io::ErrorKind::NotFound && explicit.is_none() => {
            Ok(Settings::default())
        }
        Err(err) => Err(err).with_context(|| format!("reading {}", path.display())),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
