//! UI-Komponenten: Toolbar, Status-Bar, Canvas und Input-Handling.

pub mod canvas;
pub mod input;
pub mod status;
pub mod toolbar;

pub use canvas::draw_graph;
pub use input::InputState;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
