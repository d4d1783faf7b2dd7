use crate::core::{Camera2D, GraphLayout};

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Zwischengespeichertes Layout des aktuellen Graphen.
    /// Wird vom Controller nach jeder Graph-Mutation neu aufgebaut.
    pub layout: GraphLayout,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
            layout: GraphLayout::default(),
        }
    }
}
