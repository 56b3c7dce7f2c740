//! Hearts and spinner painting.

use dashboard_core::animation::{Heart, HeartField, SPINNER_RADIUS, Spinner};
use eframe::egui::{self, Id, LayerId, Mesh, Order, Shape, Stroke};

use super::theme::{COLOR_HEART, COLOR_HOT_PINK};

/// Hearts fall over everything else, on their own layer.
pub fn draw_hearts(ctx: &egui::Context, hearts: &HeartField) {
    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("hearts")));
    for heart in hearts.hearts() {
        painter.add(heart_mesh(heart));
    }
}

/// Triangle fan from the top notch, as the outline is not convex.
fn heart_mesh(heart: &Heart) -> Shape {
    let outline = heart.outline();
    let mut mesh = Mesh::default();
    for (x, y) in &outline {
        mesh.colored_vertex(egui::pos2(*x, *y), COLOR_HEART);
    }
    for i in 1..outline.len().saturating_sub(1) as u32 {
        mesh.add_triangle(0, i, i + 1);
    }
    Shape::mesh(mesh)
}

pub fn spinner(ui: &mut egui::Ui, spinner: &Spinner) {
    let side = SPINNER_RADIUS * 2.0 + 4.0;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
    let centre = rect.center();
    let stroke = Stroke::new(2.0, COLOR_HOT_PINK);
    for (x, y) in spinner.spokes(centre.x, centre.y) {
        ui.painter()
            .line_segment([centre, egui::pos2(x, y)], stroke);
    }
}
