//! Core-Domänentypen: Graph, Kamera, Layout.

pub mod camera;
/// Core-Datenmodell des Skizzen-Graphen
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - SketchGraph: Container für alle Nodes und Edges
/// - Edge: gerichtete Kante zwischen zwei Nodes
pub mod graph;
pub mod layout;

pub use camera::Camera2D;
pub use graph::{Edge, NodeId, SketchGraph};
pub use layout::{EdgeHit, GraphLayout, NodeHit};
