//! Handler für Kamera und Viewport.

use crate::app::AppState;
use crate::core::Camera2D;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Camera2D::new();
}

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    state.view.camera.zoom_by(Camera2D::ZOOM_STEP);
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    state.view.camera.zoom_by(1.0 / Camera2D::ZOOM_STEP);
}

/// Verschiebt die Kamera um ein Weltkoordinaten-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt mit optionalem Fokuspunkt im Weltkoordinatensystem.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<glam::Vec2>) {
    match focus_world {
        Some(focus) => state.view.camera.zoom_towards(factor, focus),
        None => state.view.camera.zoom_by(factor),
    }
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
