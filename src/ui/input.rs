//! Input-Handling im Viewport: Klick-Picks, Pan, Zoom.

use crate::app::{AppIntent, AppState};
use crate::core::Camera2D;
use glam::Vec2;

/// Sammelt Viewport-Eingaben und übersetzt sie in Intents.
#[derive(Default)]
pub struct InputState;

impl InputState {
    /// Erstellt einen neuen Input-State.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet alle Eingaben im Viewport und gibt erzeugte Intents zurück.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let size = [rect.width(), rect.height()];
        if state.view.viewport_size != size {
            events.push(AppIntent::ViewportResized { size });
        }

        self.handle_clicks(response, rect, state, &mut events);
        self.handle_pan(response, rect, state, &mut events);
        self.handle_zoom(ui, response, rect, state, &mut events);

        events
    }

    /// Klick-Pick: Node vor Kante, jeweils innerhalb des Pick-Radius.
    fn handle_clicks(
        &mut self,
        response: &egui::Response,
        rect: egui::Rect,
        state: &AppState,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        let Some(pointer_pos) = response.interact_pointer_pos() else {
            return;
        };

        let world_pos = screen_pos_to_world(pointer_pos, rect, &state.view.camera);
        let pick_radius = state
            .view
            .camera
            .pick_radius_world(rect.height(), state.options.pick_radius_px)
            .max(state.options.node_radius_world);

        let layout = &state.view.layout;
        if let Some(hit) = layout
            .nearest_node(world_pos)
            .filter(|hit| hit.distance <= pick_radius)
        {
            events.push(AppIntent::NodeClicked { id: hit.node_id });
            return;
        }

        if let Some(hit) = layout
            .nearest_edge(world_pos, &state.graph.edges)
            .filter(|hit| hit.distance <= pick_radius)
        {
            events.push(AppIntent::EdgeClicked {
                from: hit.edge.from,
                to: hit.edge.to,
            });
        }
        // Klick ins Leere: keine Reaktion
    }

    /// Drag mit Primär- oder Sekundärtaste verschiebt die Kamera.
    fn handle_pan(
        &mut self,
        response: &egui::Response,
        rect: egui::Rect,
        state: &AppState,
        events: &mut Vec<AppIntent>,
    ) {
        let dragged = response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Secondary);
        if !dragged {
            return;
        }

        let delta = response.drag_delta();
        if delta == egui::Vec2::ZERO {
            return;
        }

        let world_per_px = state.view.camera.world_per_pixel(rect.height());
        events.push(AppIntent::CameraPan {
            delta: Vec2::new(-delta.x * world_per_px, -delta.y * world_per_px),
        });
    }

    /// Mausrad zoomt auf den Cursor.
    fn handle_zoom(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
        state: &AppState,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.hovered() {
            return;
        }
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let factor = if scroll > 0.0 {
            Camera2D::SCROLL_ZOOM_STEP
        } else {
            1.0 / Camera2D::SCROLL_ZOOM_STEP
        };
        let focus_world = response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, rect, &state.view.camera));

        events.push(AppIntent::CameraZoom {
            factor,
            focus_world,
        });
    }
}

/// Konvertiert eine absolute Screen-Position in Welt-Koordinaten.
fn screen_pos_to_world(pointer_pos: egui::Pos2, rect: egui::Rect, camera: &Camera2D) -> Vec2 {
    let local = Vec2::new(pointer_pos.x - rect.min.x, pointer_pos.y - rect.min.y);
    camera.screen_to_world(local, Vec2::new(rect.width(), rect.height()))
}
