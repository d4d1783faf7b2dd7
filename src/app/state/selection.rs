//! Zwei-Slot-Selektion zum Vormerken einer Kante (Start → Ziel).

use crate::core::NodeId;

/// Auswahlzustand: zwei benannte Slots für die nächste Kante.
///
/// Ein leerer Slot ist explizit `None`; damit kann "kein Node" nie mit
/// einer legitimen Node-ID kollidieren, egal wie IDs vergeben werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Start-Slot der vorgemerkten Kante
    pub start: Option<NodeId>,
    /// Ziel-Slot der vorgemerkten Kante
    pub end: Option<NodeId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Klick-Toggle über das Slot-Paar.
    ///
    /// Regeln in fester Reihenfolge, nur die erste zutreffende feuert:
    /// 1. ID belegt den Start-Slot → Start-Slot leeren
    /// 2. ID belegt den Ziel-Slot → Ziel-Slot leeren
    /// 3. Start-Slot leer → ID in den Start-Slot
    /// 4. Ziel-Slot leer → ID in den Ziel-Slot
    /// 5. beide Slots anderweitig belegt → Klick wird ignoriert
    pub fn toggle(&mut self, id: NodeId) {
        if self.start == Some(id) {
            self.start = None;
        } else if self.end == Some(id) {
            self.end = None;
        } else if self.start.is_none() {
            self.start = Some(id);
        } else if self.end.is_none() {
            self.end = Some(id);
        }
        // beide Slots voll: bewusst keine Reaktion
    }

    /// Belegt beide Slots unbedingt (Kanten-Klick), ohne Toggle-Logik.
    ///
    /// Überschreibt jede vorherige Selektion. Bewusst eine eigene
    /// Operation neben [`toggle`](Self::toggle) mit anderer Policy.
    pub fn set_pair(&mut self, v: NodeId, w: NodeId) {
        self.start = Some(v);
        self.end = Some(w);
    }

    /// Leert beide Slots.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Gibt `true` zurück, wenn beide Slots belegt sind (Gate für "Add edge").
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Entnimmt das vollständige Paar `(start, ziel)` und leert beide Slots.
    pub fn take_pair(&mut self) -> Option<(NodeId, NodeId)> {
        match (self.start, self.end) {
            (Some(v), Some(w)) => {
                self.start = None;
                self.end = None;
                Some((v, w))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_fuellt_start_dann_ziel() {
        let mut selection = SelectionState::new();
        selection.toggle(5);
        selection.toggle(7);
        assert_eq!(selection.start, Some(5));
        assert_eq!(selection.end, Some(7));
    }

    #[test]
    fn test_toggle_deselektiert_start_vor_ziel() {
        let mut selection = SelectionState::new();
        selection.toggle(5);
        selection.toggle(7);
        selection.toggle(5);
        assert_eq!(selection.start, None);
        assert_eq!(selection.end, Some(7));
    }

    #[test]
    fn test_doppel_toggle_stellt_vorzustand_wieder_her() {
        let mut selection = SelectionState::new();
        selection.toggle(3);
        let before = selection;

        selection.toggle(9);
        selection.toggle(9);

        assert_eq!(selection, before);
    }

    #[test]
    fn test_dritter_node_bei_vollen_slots_wird_ignoriert() {
        let mut selection = SelectionState::new();
        selection.toggle(1);
        selection.toggle(2);
        selection.toggle(3);
        assert_eq!(selection.start, Some(1));
        assert_eq!(selection.end, Some(2));
    }

    #[test]
    fn test_set_pair_ueberschreibt_unbedingt() {
        let mut selection = SelectionState::new();
        selection.toggle(1);
        selection.toggle(2);
        selection.set_pair(8, 9);
        assert_eq!(selection.start, Some(8));
        assert_eq!(selection.end, Some(9));
    }

    #[test]
    fn test_take_pair_leert_slots() {
        let mut selection = SelectionState::new();
        selection.set_pair(4, 6);
        assert_eq!(selection.take_pair(), Some((4, 6)));
        assert_eq!(selection, SelectionState::new());
    }

    #[test]
    fn test_take_pair_unvollstaendig_liefert_none() {
        let mut selection = SelectionState::new();
        selection.toggle(4);
        assert_eq!(selection.take_pair(), None);
        // Unvollständige Selektion bleibt erhalten
        assert_eq!(selection.start, Some(4));
    }

    #[test]
    fn test_toggle_nur_ziel_belegt() {
        let mut selection = SelectionState::new();
        selection.toggle(1);
        selection.toggle(2);
        selection.toggle(1);
        // Start leer, Ziel belegt: neuer Klick landet wieder im Start-Slot
        selection.toggle(5);
        assert_eq!(selection.start, Some(5));
        assert_eq!(selection.end, Some(2));
    }
}
