//! Left panel: credential boxes, scan and restart buttons, wordlist picker.

use dashboard_core::credentials::Field;
use eframe::egui::{self, RichText, Stroke};

use crate::app::DashboardApp;
use crate::ui::theme;

const BUTTON_SIZE: [f32; 2] = [200.0, 50.0];
const INPUT_SIZE: [f32; 2] = [200.0, 30.0];

pub fn draw_sidebar(ctx: &egui::Context, app: &mut DashboardApp) {
    egui::SidePanel::left("sidebar")
        .resizable(false)
        .exact_width(240.0)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.add_space(8.0);
                ui.label(
                    RichText::new("Welcome to your Hacker Dashboard")
                        .size(20.0)
                        .color(theme::COLOR_HOT_PINK),
                );
                ui.separator();

                let creds = &app.dashboard.credentials;
                let username = creds.username.clone();
                let masked = creds.masked_password();
                let focus = creds.focus;

                ui.label("Enter Username:");
                if input_box(ui, &username, focus == Field::Username).clicked() {
                    app.dashboard.focus(Field::Username);
                }
                ui.label("Enter Password:");
                if input_box(ui, &masked, focus == Field::Password).clicked() {
                    app.dashboard.focus(Field::Password);
                }
                ui.small("Tab switches fields. Enter starts the brute force.");
                ui.add_space(8.0);
                ui.separator();

                if pink_button(ui, "Start/Stop Scan").clicked() {
                    app.dashboard.toggle_scan();
                }
                if pink_button(ui, "Restart").clicked() {
                    app.restart();
                }

                ui.add_space(8.0);
                ui.separator();

                ui.label("WORDLIST");
                if ui.button("Select Wordlist...").clicked() {
                    app.pick_wordlist();
                }
                ui.small(
                    app.dashboard
                        .brute_force
                        .wordlist()
                        .path()
                        .file_name()
                        .map(|f| f.to_string_lossy().to_string())
                        .unwrap_or_else(|| "?".into()),
                );
            });
        });
}

/// A click-to-focus box showing `text`; typing is routed by the app, not the widget.
fn input_box(ui: &mut egui::Ui, text: &str, active: bool) -> egui::Response {
    let fill = if active {
        theme::COLOR_LIGHT_PINK
    } else {
        egui::Color32::WHITE
    };
    egui::Frame::none()
        .fill(fill)
        .stroke(Stroke::new(1.0, theme::COLOR_VIOLET_RED))
        .inner_margin(egui::Margin::symmetric(5.0, 4.0))
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(INPUT_SIZE[0] - 10.0, INPUT_SIZE[1] - 8.0));
            ui.label(RichText::new(text).size(18.0));
        })
        .response
        .interact(egui::Sense::click())
}

fn pink_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add_sized(
        BUTTON_SIZE,
        egui::Button::new(RichText::new(label).size(18.0).color(theme::COLOR_DEEP_PINK))
            .fill(theme::COLOR_PINK)
            .stroke(Stroke::new(1.0, theme::COLOR_VIOLET_RED)),
    )
}
