//! Canvas-Zeichnung: Kanten als Pfeile, Nodes als beschriftete Scheiben.
//!
//! Gezeichnet wird direkt über den egui-Painter; die Positionen kommen aus
//! dem zwischengespeicherten Layout im ViewState.

use crate::app::AppState;
use crate::core::NodeId;
use glam::Vec2;

/// Konvertiert eine RGBA-Farbe aus den Optionen in eine egui-Farbe.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

/// Slot-Zugehörigkeit bestimmt die Node-Farbe (Start-Slot vor Ziel-Slot).
fn node_fill(state: &AppState, id: NodeId) -> egui::Color32 {
    if state.selection.start == Some(id) {
        color32(state.options.node_color_start)
    } else if state.selection.end == Some(id) {
        color32(state.options.node_color_end)
    } else {
        color32(state.options.node_color_default)
    }
}

/// Zeichnet den kompletten Graph in das übergebene Rechteck.
pub fn draw_graph(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let camera = &state.view.camera;
    let layout = &state.view.layout;
    let opts = &state.options;

    let screen_size = Vec2::new(rect.width(), rect.height());
    let world_per_px = camera.world_per_pixel(rect.height());
    let px = |world_units: f32| world_units / world_per_px;

    let to_screen = |world: Vec2| -> egui::Pos2 {
        let local = camera.world_to_screen(world, screen_size);
        egui::pos2(rect.min.x + local.x, rect.min.y + local.y)
    };

    let node_radius_px = px(opts.node_radius_world);
    let edge_color = color32(opts.edge_color);
    let edge_stroke = egui::Stroke::new(px(opts.edge_thickness_world).max(1.0), edge_color);

    // Kanten zuerst, damit Nodes darüber liegen
    for edge in &state.graph.edges {
        let (Some(from_world), Some(to_world)) =
            (layout.position(edge.from), layout.position(edge.to))
        else {
            continue;
        };

        if edge.from == edge.to {
            // Self-Loop: kleiner Kreis am Node-Rand
            let center = to_screen(from_world + Vec2::new(opts.node_radius_world * 1.6, 0.0));
            painter.circle_stroke(center, node_radius_px * 0.7, edge_stroke);
            continue;
        }

        let from = to_screen(from_world);
        let to = to_screen(to_world);
        let delta = to - from;
        let length = delta.length();
        if length <= f32::EPSILON {
            continue;
        }
        let dir = delta / length;

        // Linie endet am Rand des Zielknotens, davor sitzt die Pfeilspitze
        let tip = to - dir * node_radius_px;
        let arrow_len = px(opts.arrow_length_world);
        let arrow_w = px(opts.arrow_width_world);
        let base = tip - dir * arrow_len;
        let normal = egui::vec2(-dir.y, dir.x);

        painter.line_segment([from, base], edge_stroke);
        painter.add(egui::Shape::convex_polygon(
            vec![
                tip,
                base + normal * (arrow_w * 0.5),
                base - normal * (arrow_w * 0.5),
            ],
            edge_color,
            egui::Stroke::NONE,
        ));

        // Kantenbeschriftung am Mittelpunkt
        let mid = egui::pos2((from.x + to.x) * 0.5, (from.y + to.y) * 0.5);
        painter.text(
            mid,
            egui::Align2::CENTER_BOTTOM,
            format!("{}→{}", edge.from, edge.to),
            egui::FontId::proportional(11.0),
            edge_color,
        );
    }

    for &id in &state.graph.nodes {
        let Some(world) = layout.position(id) else {
            continue;
        };
        let center = to_screen(world);

        painter.circle_filled(center, node_radius_px, node_fill(state, id));
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            id.to_string(),
            egui::FontId::proportional((node_radius_px * 1.1).clamp(9.0, 22.0)),
            egui::Color32::BLACK,
        );
    }
}
