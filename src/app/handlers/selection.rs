//! Handler für Selektions-Operationen.

use crate::app::AppState;
use crate::core::NodeId;

/// Node-Klick: Slot-Toggle gemäß fester Regelreihenfolge.
pub fn toggle_node(state: &mut AppState, id: NodeId) {
    state.selection.toggle(id);
    log::debug!(
        "Selektion nach Klick auf Node {}: start={:?} ziel={:?}",
        id,
        state.selection.start,
        state.selection.end
    );
}

/// Kanten-Klick: beide Slots unbedingt mit den Endpunkten belegen.
pub fn select_edge_endpoints(state: &mut AppState, v: NodeId, w: NodeId) {
    state.selection.set_pair(v, w);
    log::debug!("Kanten-Endpunkte {}→{} in die Slots übernommen", v, w);
}
