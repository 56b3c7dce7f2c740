//! Main panel: scan status and progress, brute-force status, discovered addresses.

use dashboard_core::cipher::DISPLAY_SHIFT;
use dashboard_core::dashboard::Dashboard;
use dashboard_core::scan::ScanStatus;
use eframe::egui::{self, RichText};

use crate::app::DashboardApp;
use crate::ui::{decorations, theme};

pub fn draw_dashboard_view(ctx: &egui::Context, app: &DashboardApp) {
    let dashboard = &app.dashboard;
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.columns(2, |columns| {
            draw_scan(&mut columns[0], dashboard);
            columns[0].add_space(24.0);
            draw_brute_force(&mut columns[0], dashboard);
            draw_addresses(&mut columns[1], dashboard);
        });
    });
}

fn draw_scan(ui: &mut egui::Ui, dashboard: &Dashboard) {
    ui.add_space(20.0);
    match dashboard.scan.status() {
        ScanStatus::Scanning => {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Scanning...").size(20.0).color(theme::COLOR_HOT_PINK));
                decorations::spinner(ui, &dashboard.spinner);
            });
        }
        ScanStatus::Complete => {
            ui.label(RichText::new("Scan Complete!").size(30.0).color(theme::COLOR_HOT_PINK));
        }
        ScanStatus::Stopped => {
            ui.label(RichText::new("Scan Stopped").size(20.0).color(theme::COLOR_HOT_PINK));
        }
    }

    let progress = dashboard.scan.progress;
    if progress < 1.0 {
        ui.add(
            egui::ProgressBar::new(progress as f32)
                .desired_width(200.0)
                .fill(theme::COLOR_HOT_PINK),
        );
    }
}

fn draw_brute_force(ui: &mut egui::Ui, dashboard: &Dashboard) {
    let session = &dashboard.brute_force;

    if let Some(crack) = dashboard.crack_display() {
        ui.label(
            RichText::new(format!("SUCCESS! Password Cracked: {}", crack.password))
                .size(24.0)
                .color(theme::COLOR_HOT_PINK),
        );
        ui.label(
            RichText::new(format!("Caesar Cipher (Shift {DISPLAY_SHIFT}): {}", crack.cipher))
                .size(24.0)
                .color(theme::COLOR_VIOLET_RED),
        );
        return;
    }

    ui.label(RichText::new(format!("Testing: {}", session.guess())).size(20.0));
    let guess_len = session.guess().chars().count();
    if guess_len > 0 {
        ui.label(
            RichText::new(format!("Length: {guess_len} | Trying all combinations..."))
                .size(16.0)
                .color(theme::COLOR_VIOLET_RED),
        );
        ui.small(format!(
            "{} attempts, {} phase",
            session.attempts(),
            session.phase()
        ));
    }
}

fn draw_addresses(ui: &mut egui::Ui, dashboard: &Dashboard) {
    let addresses = &dashboard.scan.addresses;
    if addresses.is_empty() {
        return;
    }

    ui.add_space(20.0);
    ui.label(RichText::new("IP Addresses nearby:").size(24.0));
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for address in addresses {
                ui.monospace(address);
            }
        });
}
