//! Graph Sketch Editor Library.
//! Kern-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState, ViewState};
pub use core::{Camera2D, Edge, GraphLayout, NodeId, SketchGraph};
pub use shared::EditorOptions;
