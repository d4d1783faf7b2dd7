//! Handler für Node/Kanten-Editing und Reset.

use crate::app::AppState;

/// Fügt einen neuen Node mit der nächsten ID hinzu.
pub fn add_node(state: &mut AppState) {
    let id = state.graph.add_node();
    state.refresh_layout();
    log::info!("Node {} hinzugefügt", id);
}

/// Erstellt die Kante aus den beiden Selektions-Slots und leert sie.
///
/// Vorbedingung des Aufrufers: beide Slots belegt. Eine Verletzung ist
/// ein Contract-Bruch des Aufrufers und wird ignoriert (Warnung), kein
/// meldepflichtiger Fehler.
pub fn add_edge(state: &mut AppState) {
    let Some((from, to)) = state.selection.take_pair() else {
        log::warn!("AddEdge ohne vollständige Selektion ignoriert");
        return;
    };

    // Die Slots werden nur aus Klicks auf existierende Nodes befüllt
    debug_assert!(
        state.graph.contains_node(from) && state.graph.contains_node(to),
        "Kanten-Endpunkte müssen existierende Nodes sein"
    );

    state.graph.add_edge(from, to);
    state.refresh_layout();
    log::info!("Kante {}→{} erstellt", from, to);
}

/// Setzt Graph, Selektion und ID-Zähler auf den Anfangszustand zurück.
pub fn reset(state: &mut AppState) {
    state.graph.reset();
    state.selection.clear();
    state.refresh_layout();
    log::info!("Graph zurückgesetzt");
}
