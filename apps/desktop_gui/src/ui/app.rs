use eframe::egui;

use crate::controller::{
    ConversionDirection, FormEvent, FormField, SessionController, ShutdownHandle,
};
use crate::ui::theme::{
    FormTheme, QUIT_LABEL, ROW_PAD_HEIGHT, TO_CELSIUS_LABEL, TO_FAHRENHEIT_LABEL,
};

/// Closes the native window; `run_native` then returns and the process exits
/// normally.
pub struct ViewportShutdown {
    ctx: egui::Context,
}

impl ViewportShutdown {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl ShutdownHandle for ViewportShutdown {
    fn request_shutdown(&mut self) {
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

pub struct TemperatureApp {
    controller: SessionController<ViewportShutdown>,
    theme: FormTheme,
}

impl TemperatureApp {
    pub fn new(ctx: egui::Context, theme: FormTheme) -> Self {
        Self {
            controller: SessionController::new(ViewportShutdown::new(ctx)),
            theme,
        }
    }

    fn temperature_field(
        &mut self,
        ui: &mut egui::Ui,
        field: FormField,
        events: &mut Vec<FormEvent>,
    ) {
        let color = self
            .theme
            .field_text_color(self.controller.view().field(field).is_error);
        let width = self.theme.min_field_width().max(ui.available_width() / 3.0);
        let edit = egui::TextEdit::singleline(self.controller.view_mut().text_mut(field))
            .id_salt(field.id_salt())
            .font(self.theme.font())
            .text_color(color)
            .horizontal_align(egui::Align::Center)
            .desired_width(width);

        let response = ui.add(edit);
        if response.gained_focus() {
            events.push(FormEvent::FocusGained(field));
        }
        if response.lost_focus() {
            events.push(FormEvent::FocusLost(field));
        }
    }

    fn direction_button(&self, ui: &mut egui::Ui, direction: ConversionDirection) -> bool {
        let label = match direction {
            ConversionDirection::ToCelsius => TO_CELSIUS_LABEL,
            ConversionDirection::ToFahrenheit => TO_FAHRENHEIT_LABEL,
        };
        let mut button =
            egui::Button::new(egui::RichText::new(label).size(self.theme.font_size).strong());
        if let Some(fill) = self
            .theme
            .button_fill(self.controller.view().is_button_active(direction))
        {
            button = button.fill(fill);
        }
        ui.add(button).clicked()
    }

    fn show_form(&mut self, ui: &mut egui::Ui) -> Vec<FormEvent> {
        let mut events = Vec::new();
        let font_size = self.theme.font_size;
        let heading =
            |field: FormField| egui::RichText::new(field.unit().heading()).size(font_size).strong();

        egui::Grid::new("temperature_form")
            .num_columns(3)
            .min_row_height(ROW_PAD_HEIGHT)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                ui.label(heading(FormField::Fahrenheit));
                ui.label("");
                ui.label(heading(FormField::Celsius));
                ui.end_row();

                self.temperature_field(ui, FormField::Fahrenheit, &mut events);
                ui.vertical_centered(|ui| {
                    if self.direction_button(ui, ConversionDirection::ToCelsius) {
                        events.push(FormEvent::ConvertToCelsiusPressed);
                    }
                    if self.direction_button(ui, ConversionDirection::ToFahrenheit) {
                        events.push(FormEvent::ConvertToFahrenheitPressed);
                    }
                });
                self.temperature_field(ui, FormField::Celsius, &mut events);
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.set_min_height(ROW_PAD_HEIGHT);
            ui.label(
                egui::RichText::new(self.controller.view().status())
                    .size(self.theme.font_size)
                    .strong(),
            );
            let quit =
                egui::Button::new(egui::RichText::new(QUIT_LABEL).size(self.theme.font_size));
            if ui.add(quit).clicked() {
                events.push(FormEvent::QuitPressed);
            }
        });

        events
    }
}

impl eframe::App for TemperatureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = egui::CentralPanel::default()
            .show(ctx, |ui| self.show_form(ui))
            .inner;

        for event in events {
            self.controller.handle(event);
        }
    }
}
