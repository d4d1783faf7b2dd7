//! Toolbar mit den drei Graph-Operationen und Ansichts-Buttons.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Add node").clicked() {
                events.push(AppIntent::AddNodeRequested);
            }

            // "Add edge" erst freigeben, wenn beide Slots belegt sind
            let can_add_edge = state.selection.is_complete();
            if ui
                .add_enabled(can_add_edge, egui::Button::new("Add edge"))
                .clicked()
            {
                events.push(AppIntent::AddEdgeRequested);
            }

            if ui.button("Reset").clicked() {
                events.push(AppIntent::ResetRequested);
            }

            ui.separator();

            // Slot-Status als Hinweis für den nächsten Klick
            let hint = match (state.selection.start, state.selection.end) {
                (None, None) => "Wähle Startknoten".to_string(),
                (Some(s), None) => format!("Startknoten: {} → Wähle Zielknoten", s),
                (None, Some(e)) => format!("Zielknoten: {} → Wähle Startknoten", e),
                (Some(s), Some(e)) => format!("Kante bereit: {} → {}", s, e),
            };
            ui.label(hint);

            ui.separator();

            if ui.button("Zoom −").clicked() {
                events.push(AppIntent::ZoomOutRequested);
            }
            if ui.button("Zoom +").clicked() {
                events.push(AppIntent::ZoomInRequested);
            }
            if ui.button("Ansicht zentrieren").clicked() {
                events.push(AppIntent::ResetCameraRequested);
            }
        });
    });

    events
}
