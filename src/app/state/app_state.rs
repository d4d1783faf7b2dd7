use crate::app::CommandLog;
use crate::core::{GraphLayout, SketchGraph};
use crate::shared::EditorOptions;

use super::{SelectionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktueller Skizzen-Graph
    pub graph: SketchGraph,
    /// Zwei-Slot-Selektion für die nächste Kante
    pub selection: SelectionState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            graph: SketchGraph::new(),
            selection: SelectionState::new(),
            view: ViewState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Gibt die Anzahl der Kanten zurück (für UI-Anzeige)
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Baut das zwischengespeicherte Layout nach einer Graph-Mutation neu auf.
    pub fn refresh_layout(&mut self) {
        self.view.layout = GraphLayout::build(&self.graph);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
