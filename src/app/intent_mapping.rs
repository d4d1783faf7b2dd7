//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::AddNodeRequested => vec![AppCommand::AddNode],
        AppIntent::AddEdgeRequested => {
            // Vorbedingung des Aufrufers: beide Slots belegt. Die Toolbar
            // deaktiviert den Button; hier die zweite Verteidigungslinie.
            if state.selection.is_complete() {
                vec![AppCommand::AddEdge]
            } else {
                Vec::new()
            }
        }
        AppIntent::ResetRequested => vec![AppCommand::ResetGraph],
        AppIntent::NodeClicked { id } => vec![AppCommand::ToggleNodeSelection { id }],
        AppIntent::EdgeClicked { from, to } => {
            vec![AppCommand::SelectEdgeEndpoints { v: from, w: to }]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
    }
}
