//! Light pink theme with hot-pink accents.

use std::path::Path;

use eframe::egui::{self, Color32, FontData, FontDefinitions, FontFamily, Visuals};

pub const COLOR_MISTY_ROSE: Color32 = Color32::from_rgb(255, 228, 225);
pub const COLOR_PINK: Color32 = Color32::from_rgb(255, 192, 203);
pub const COLOR_LIGHT_PINK: Color32 = Color32::from_rgb(255, 182, 193);
pub const COLOR_HOT_PINK: Color32 = Color32::from_rgb(255, 105, 180);
pub const COLOR_DEEP_PINK: Color32 = Color32::from_rgb(255, 20, 147);
pub const COLOR_VIOLET_RED: Color32 = Color32::from_rgb(199, 21, 133);
pub const COLOR_HEART: Color32 = Color32::from_rgb(255, 102, 102);

const CUSTOM_FONT: &str = "dashboard-font";

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::light();
    visuals.override_text_color = Some(Color32::BLACK);
    visuals.panel_fill = COLOR_MISTY_ROSE;
    visuals.window_fill = COLOR_MISTY_ROSE;
    visuals.selection.bg_fill = COLOR_HOT_PINK;
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}

/// Put the font at `path` in front of egui's proportional family.
/// A missing or unreadable file keeps the built-in fonts.
pub fn install_font(ctx: &egui::Context, path: Option<&Path>) {
    let Some(path) = path else {
        return;
    };

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Failed to load font {}: {e}. Using default font.", path.display());
            return;
        }
    };

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(CUSTOM_FONT.to_owned(), FontData::from_owned(bytes));
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .insert(0, CUSTOM_FONT.to_owned());
    ctx.set_fonts(fonts);
    log::info!("Using font {}", path.display());
}
