//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::NodeId;

fn slot_label(slot: Option<NodeId>) -> String {
    slot.map_or_else(|| "—".to_string(), |id| id.to_string())
}

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Nodes: {} | Edges: {}",
                state.node_count(),
                state.edge_count()
            ));

            ui.separator();

            ui.label(format!(
                "Start: {} | Ziel: {}",
                slot_label(state.selection.start),
                slot_label(state.selection.end)
            ));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Position: ({:.1}, {:.1})",
                state.view.camera.zoom,
                state.view.camera.position.x,
                state.view.camera.position.y
            ));
        });
    });
}
