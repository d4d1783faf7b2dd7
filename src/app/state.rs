//! Application State — zentrale Datenhaltung.

pub mod app_state;
pub mod selection;
pub mod view;

pub use app_state::AppState;
pub use selection::SelectionState;
pub use view::ViewState;
