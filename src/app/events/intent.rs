use crate::core::NodeId;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neuen Node anlegen (Toolbar)
    AddNodeRequested,
    /// Kante aus den beiden Selektions-Slots anlegen (Toolbar)
    AddEdgeRequested,
    /// Graph, Selektion und ID-Zähler auf den Anfangszustand zurücksetzen
    ResetRequested,
    /// Node wurde im Canvas angeklickt
    NodeClicked { id: NodeId },
    /// Kante wurde im Canvas angeklickt
    EdgeClicked { from: NodeId, to: NodeId },
    /// Anwendung beenden
    ExitRequested,
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
}
