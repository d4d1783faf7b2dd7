use crate::core::NodeId;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neuen Node mit der nächsten ID anlegen
    AddNode,
    /// Kante aus den beiden Selektions-Slots anlegen und Slots leeren
    AddEdge,
    /// Graph, Selektion und ID-Zähler zurücksetzen
    ResetGraph,
    /// Node-Klick: Slot-Toggle
    ToggleNodeSelection { id: NodeId },
    /// Kanten-Klick: beide Slots mit den Endpunkten belegen
    SelectEdgeEndpoints { v: NodeId, w: NodeId },
    /// Anwendung beenden
    RequestExit,
    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Kamera um Delta verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
}
