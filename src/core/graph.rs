//! Die zentrale Graph-Datenstruktur mit Nodes und Edges.

/// Node-Identität: positive Ganzzahl, monoton vergeben (erste ID ist 1).
pub type NodeId = u64;

/// Eine gerichtete Kante zwischen zwei Nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Start-Node-ID
    pub from: NodeId,
    /// Ziel-Node-ID
    pub to: NodeId,
}

impl Edge {
    /// Erstellt eine neue Kante
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }
}

/// Skizzen-Graph: Nodes und Kanten in Erstellungsreihenfolge
#[derive(Debug, Clone, Default)]
pub struct SketchGraph {
    /// Alle Node-IDs in Erstellungsreihenfolge
    pub nodes: Vec<NodeId>,
    /// Alle Kanten in Erstellungsreihenfolge
    pub edges: Vec<Edge>,
    /// Zähler der zuletzt vergebenen Node-ID
    next_id: u64,
}

impl SketchGraph {
    /// Erstellt einen neuen leeren Graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen neuen Node hinzu und gibt dessen ID zurück.
    ///
    /// IDs sind lückenlos aufsteigend (1, 2, 3, …) und werden innerhalb
    /// einer Session nie wiederverwendet.
    pub fn add_node(&mut self) -> NodeId {
        self.next_id += 1;
        self.nodes.push(self.next_id);
        self.next_id
    }

    /// Fügt eine Kante hinzu.
    ///
    /// Duplikate und Self-Loops werden bewusst nicht abgewiesen.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.edges.push(Edge::new(from, to));
    }

    /// Setzt den Graph auf den leeren Anfangszustand zurück (inklusive ID-Zähler).
    pub fn reset(&mut self) {
        self.next_id = 0;
        self.nodes.clear();
        self.edges.clear();
    }

    /// Gibt die Anzahl der Nodes zurück
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt die Anzahl der Kanten zurück
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Prüft ob ein Node mit dieser ID existiert
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// Gibt `true` zurück, wenn weder Nodes noch Kanten existieren.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Zuletzt vergebene Node-ID (0 = noch keine vergeben).
    pub fn last_id(&self) -> u64 {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_ids_sind_lueckenlos() {
        let mut graph = SketchGraph::new();
        for _ in 0..5 {
            graph.add_node();
        }
        assert_eq!(graph.nodes, vec![1, 2, 3, 4, 5]);
        assert_eq!(graph.last_id(), 5);
    }

    #[test]
    fn test_add_edge_haelt_reihenfolge() {
        let mut graph = SketchGraph::new();
        let a = graph.add_node();
        let b = graph.add_node();
        graph.add_edge(a, b);
        graph.add_edge(b, a);
        assert_eq!(graph.edges, vec![Edge::new(1, 2), Edge::new(2, 1)]);
    }

    #[test]
    fn test_contains_node_kennt_nur_vergebene_ids() {
        let mut graph = SketchGraph::new();
        let a = graph.add_node();
        assert!(graph.contains_node(a));
        assert!(!graph.contains_node(a + 1));

        graph.reset();
        assert!(!graph.contains_node(a));
    }

    #[test]
    fn test_duplikate_und_self_loops_erlaubt() {
        let mut graph = SketchGraph::new();
        let a = graph.add_node();
        let b = graph.add_node();
        graph.add_edge(a, b);
        graph.add_edge(a, b);
        graph.add_edge(a, a);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_reset_liefert_kanonischen_leerzustand() {
        let mut graph = SketchGraph::new();
        graph.add_node();
        graph.add_node();
        graph.add_edge(1, 2);

        graph.reset();

        assert!(graph.is_empty());
        assert_eq!(graph.last_id(), 0);
        // Nach dem Reset beginnt die ID-Vergabe wieder bei 1
        assert_eq!(graph.add_node(), 1);
    }
}
