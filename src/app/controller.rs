//! Application Controller für zentrale Event-Verarbeitung.

use super::{handlers, intent_mapping, AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            // === Editing ===
            AppCommand::AddNode => handlers::editing::add_node(state),
            AppCommand::AddEdge => handlers::editing::add_edge(state),
            AppCommand::ResetGraph => handlers::editing::reset(state),

            // === Selektion ===
            AppCommand::ToggleNodeSelection { id } => handlers::selection::toggle_node(state, id),
            AppCommand::SelectEdgeEndpoints { v, w } => {
                handlers::selection::select_edge_endpoints(state, v, w)
            }

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::lifecycle::request_exit(state),
        }

        Ok(())
    }
}
