use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::config::{Overrides, Settings};
use crate::ui::{FormTheme, TemperatureApp};

#[derive(Parser, Debug)]
#[command(
    name = "temperature_gui",
    about = "Convert temperatures between Fahrenheit and Celsius"
)]
struct Args {
    /// Settings file (defaults to ./temperature_gui.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<f32>,
    #[arg(long)]
    height: Option<f32>,
    #[arg(long)]
    font_size: Option<f32>,
    /// tracing filter, overridden by RUST_LOG
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            window_width: self.width,
            window_height: self.height,
            font_size: self.font_size,
            log_filter: self.log_filter.clone(),
        }
    }
}

fn resolve_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = config::load_settings(args.config.as_deref())?;
    settings.apply_overrides(args.overrides());
    settings.validate().context("invalid settings")?;
    Ok(settings)
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = resolve_settings(&args)?;
    init_tracing(&settings.log_filter);
    tracing::info!(
        width = settings.window_width,
        height = settings.window_height,
        font_size = settings.font_size,
        "starting temperature converter"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height]),
        ..Default::default()
    };
    let theme = FormTheme::from_settings(&settings);

    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |cc| {
            theme.apply(&cc.egui_ctx);
            Ok(Box::new(TemperatureApp::new(cc.egui_ctx.clone(), theme)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))?;

    tracing::info!("window closed");
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
