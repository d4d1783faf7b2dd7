//! Automatisches Layered-Layout (Top-Down) und Hit-Tests für Klick-Picks.
//!
//! Der Graph kennt keine Nutzerpositionen; die Platzierung wird bei jeder
//! Mutation neu berechnet. Ebenen entstehen per Kahn-Topologie, Zyklen
//! werden deterministisch nach dem azyklischen Teil einsortiert.

use super::{Edge, NodeId, SketchGraph};
use glam::Vec2;
use std::collections::{HashMap, VecDeque};

/// Horizontaler Abstand zwischen Nodes einer Ebene (Welteinheiten).
pub const RANK_H_SPACING: f32 = 48.0;
/// Vertikaler Abstand zwischen Ebenen (Welteinheiten).
pub const RANK_V_SPACING: f32 = 64.0;

/// Treffer eines Node-Picks
#[derive(Debug, Clone, Copy)]
pub struct NodeHit {
    /// Getroffener Node
    pub node_id: NodeId,
    /// Distanz zum Klickpunkt (Welteinheiten)
    pub distance: f32,
}

/// Treffer eines Kanten-Picks
#[derive(Debug, Clone, Copy)]
pub struct EdgeHit {
    /// Getroffene Kante
    pub edge: Edge,
    /// Distanz zum Kantensegment (Welteinheiten)
    pub distance: f32,
}

/// Berechnete Node-Positionen für den aktuellen Graph
#[derive(Debug, Clone, Default)]
pub struct GraphLayout {
    positions: HashMap<NodeId, Vec2>,
}

impl GraphLayout {
    /// Berechnet ein Layered-Layout für den Graph.
    ///
    /// Wurzeln liegen auf Ebene 0, sonst gilt 1 + maximale Ebene der
    /// bereits platzierten Vorgänger. Ebene bestimmt die Y-Position,
    /// die Nodes einer Ebene werden horizontal zentriert aufgereiht.
    pub fn build(graph: &SketchGraph) -> Self {
        let ranks = assign_ranks(graph);

        // Nodes pro Ebene in Erstellungsreihenfolge gruppieren
        let max_rank = ranks.values().copied().max().unwrap_or(0);
        let mut rows: Vec<Vec<NodeId>> = vec![Vec::new(); max_rank + 1];
        for &id in &graph.nodes {
            rows[ranks[&id]].push(id);
        }

        let mut positions = HashMap::with_capacity(graph.node_count());
        for (rank, row) in rows.iter().enumerate() {
            let width = (row.len().saturating_sub(1)) as f32 * RANK_H_SPACING;
            for (slot, &id) in row.iter().enumerate() {
                let x = slot as f32 * RANK_H_SPACING - width * 0.5;
                let y = rank as f32 * RANK_V_SPACING;
                positions.insert(id, Vec2::new(x, y));
            }
        }

        Self { positions }
    }

    /// Gibt die Position eines Nodes zurück (None = Node unbekannt).
    pub fn position(&self, id: NodeId) -> Option<Vec2> {
        self.positions.get(&id).copied()
    }

    /// Gibt die Anzahl platzierter Nodes zurück.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Gibt `true` zurück, wenn keine Positionen vorliegen.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Findet den nächstgelegenen Node zur Weltposition.
    ///
    /// Bei Distanzgleichheit gewinnt die kleinere ID (deterministisch).
    pub fn nearest_node(&self, world_pos: Vec2) -> Option<NodeHit> {
        let mut best: Option<NodeHit> = None;
        for (&id, &pos) in &self.positions {
            let distance = (pos - world_pos).length();
            let better = match best {
                None => true,
                Some(hit) => {
                    distance < hit.distance || (distance == hit.distance && id < hit.node_id)
                }
            };
            if better {
                best = Some(NodeHit {
                    node_id: id,
                    distance,
                });
            }
        }
        best
    }

    /// Findet die nächstgelegene Kante (Punkt-zu-Segment-Distanz).
    ///
    /// Bei Distanzgleichheit gewinnt die zuerst erstellte Kante.
    pub fn nearest_edge(&self, world_pos: Vec2, edges: &[Edge]) -> Option<EdgeHit> {
        let mut best: Option<EdgeHit> = None;
        for &edge in edges {
            let (Some(a), Some(b)) = (self.position(edge.from), self.position(edge.to)) else {
                continue;
            };
            let distance = segment_distance(world_pos, a, b);
            if best.is_none_or(|hit| distance < hit.distance) {
                best = Some(EdgeHit { edge, distance });
            }
        }
        best
    }
}

/// Ebenen-Zuordnung per Kahn-Topologie.
///
/// Nodes, die wegen Zyklen nie Indegree 0 erreichen, erhalten ihre Ebene
/// anschließend in Erstellungsreihenfolge aus den bereits platzierten
/// Vorgängern (Fallback: Ebene 0). Self-Loops zählen nicht als Vorgänger.
fn assign_ranks(graph: &SketchGraph) -> HashMap<NodeId, usize> {
    let mut indegree: HashMap<NodeId, usize> = graph.nodes.iter().map(|&id| (id, 0)).collect();
    for edge in &graph.edges {
        if edge.from != edge.to {
            if let Some(count) = indegree.get_mut(&edge.to) {
                *count += 1;
            }
        }
    }

    let mut ranks: HashMap<NodeId, usize> = HashMap::with_capacity(graph.node_count());
    let mut queue: VecDeque<NodeId> = graph
        .nodes
        .iter()
        .copied()
        .filter(|id| indegree[id] == 0)
        .collect();

    while let Some(id) = queue.pop_front() {
        if ranks.contains_key(&id) {
            continue;
        }
        ranks.insert(id, rank_from_predecessors(graph, &ranks, id));

        for edge in &graph.edges {
            if edge.from != id || edge.to == id {
                continue;
            }
            if let Some(count) = indegree.get_mut(&edge.to) {
                *count = count.saturating_sub(1);
                if *count == 0 && !ranks.contains_key(&edge.to) {
                    queue.push_back(edge.to);
                }
            }
        }
    }

    // Rest (Zyklen) deterministisch in Erstellungsreihenfolge
    for &id in &graph.nodes {
        if !ranks.contains_key(&id) {
            let rank = rank_from_predecessors(graph, &ranks, id);
            ranks.insert(id, rank);
        }
    }

    ranks
}

/// 1 + maximale Ebene der bereits platzierten Vorgänger, sonst 0.
fn rank_from_predecessors(
    graph: &SketchGraph,
    ranks: &HashMap<NodeId, usize>,
    id: NodeId,
) -> usize {
    graph
        .edges
        .iter()
        .filter(|edge| edge.to == id && edge.from != id)
        .filter_map(|edge| ranks.get(&edge.from))
        .map(|rank| rank + 1)
        .max()
        .unwrap_or(0)
}

/// Distanz von Punkt `p` zum Segment `a`–`b`.
fn segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return (p - a).length();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(n: usize) -> SketchGraph {
        let mut graph = SketchGraph::new();
        let mut prev = None;
        for _ in 0..n {
            let id = graph.add_node();
            if let Some(p) = prev {
                graph.add_edge(p, id);
            }
            prev = Some(id);
        }
        graph
    }

    #[test]
    fn test_kette_bildet_ebenen() {
        let layout = GraphLayout::build(&chain(3));
        let y1 = layout.position(1).unwrap().y;
        let y2 = layout.position(2).unwrap().y;
        let y3 = layout.position(3).unwrap().y;
        assert!(y1 < y2 && y2 < y3);
    }

    #[test]
    fn test_wurzeln_teilen_ebene_null() {
        let mut graph = SketchGraph::new();
        graph.add_node();
        graph.add_node();
        let layout = GraphLayout::build(&graph);
        assert_eq!(layout.position(1).unwrap().y, 0.0);
        assert_eq!(layout.position(2).unwrap().y, 0.0);
        // Nebeneinander, nicht übereinander
        assert_ne!(layout.position(1).unwrap().x, layout.position(2).unwrap().x);
    }

    #[test]
    fn test_zyklus_terminiert_und_platziert_alle() {
        let mut graph = SketchGraph::new();
        let a = graph.add_node();
        let b = graph.add_node();
        graph.add_edge(a, b);
        graph.add_edge(b, a);

        let layout = GraphLayout::build(&graph);
        assert_eq!(layout.len(), 2);
        // Erstellungsreihenfolge bricht den Zyklus: a vor b
        assert!(layout.position(a).unwrap().y < layout.position(b).unwrap().y);
    }

    #[test]
    fn test_self_loop_platziert_node() {
        let mut graph = SketchGraph::new();
        let a = graph.add_node();
        graph.add_edge(a, a);
        let layout = GraphLayout::build(&graph);
        assert_eq!(layout.position(a), Some(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_nearest_node_trifft_naechsten() {
        let layout = GraphLayout::build(&chain(3));
        let target = layout.position(2).unwrap();
        let hit = layout
            .nearest_node(target + Vec2::new(3.0, 0.0))
            .expect("Treffer erwartet");
        assert_eq!(hit.node_id, 2);
        assert!((hit.distance - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_nearest_edge_trifft_segmentmitte() {
        let graph = chain(2);
        let layout = GraphLayout::build(&graph);
        let a = layout.position(1).unwrap();
        let b = layout.position(2).unwrap();
        let mid = (a + b) * 0.5 + Vec2::new(5.0, 0.0);

        let hit = layout
            .nearest_edge(mid, &graph.edges)
            .expect("Treffer erwartet");
        assert_eq!(hit.edge, Edge::new(1, 2));
        assert!((hit.distance - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_layout_leerer_graph() {
        let layout = GraphLayout::build(&SketchGraph::new());
        assert!(layout.is_empty());
        assert!(layout.nearest_node(Vec2::ZERO).is_none());
    }
}
