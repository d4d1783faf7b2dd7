//! 2D-Kamera für Pan und Zoom.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f32 = 256.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 50.0;
    /// Zoom-Schritt bei stufenweisem Zoom (Toolbar-Buttons).
    pub const ZOOM_STEP: f32 = 1.2;
    /// Zoom-Schritt bei Mausrad-Scroll.
    pub const SCROLL_ZOOM_STEP: f32 = 1.1;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Zoomt auf einen Fokuspunkt: der Weltpunkt unter dem Cursor bleibt stehen.
    pub fn zoom_towards(&mut self, factor: f32, focus_world: Vec2) {
        let old_zoom = self.zoom;
        self.zoom_by(factor);
        let applied = self.zoom / old_zoom;
        self.position = focus_world + (self.position - focus_world) / applied;
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        let vh = viewport_height.max(1.0);
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * vh)
    }

    /// Konvertiert Screen-Koordinaten (relativ zum Viewport) zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let scale = self.world_per_pixel(screen_size.y);
        (screen_pos - screen_size * 0.5) * scale + self.position
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (relativ zum Viewport).
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let scale = self.world_per_pixel(screen_size.y);
        (world_pos - self.position) / scale + screen_size * 0.5
    }

    /// Berechnet den Pick-Radius in Welt-Einheiten für Klick-Selektion.
    ///
    /// Konvertiert den Pixel-Radius in Welt-Koordinaten
    /// basierend auf aktuellem Zoom und Viewport-Höhe.
    pub fn pick_radius_world(&self, viewport_height: f32, pick_radius_px: f32) -> f32 {
        pick_radius_px * self.world_per_pixel(viewport_height)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_world_roundtrip() {
        let mut camera = Camera2D::new();
        camera.position = Vec2::new(10.0, -20.0);
        camera.zoom = 2.5;

        let screen_size = Vec2::new(1024.0, 768.0);
        let screen = Vec2::new(200.0, 300.0);
        let world = camera.screen_to_world(screen, screen_size);
        let back = camera.world_to_screen(world, screen_size);

        assert!((back - screen).length() < 1e-3);
    }

    #[test]
    fn test_zoom_clamping() {
        let mut camera = Camera2D::new();
        camera.zoom_by(0.0001);
        assert_eq!(camera.zoom, Camera2D::ZOOM_MIN);
        camera.zoom_by(1e9);
        assert_eq!(camera.zoom, Camera2D::ZOOM_MAX);
    }

    #[test]
    fn test_zoom_towards_fixiert_fokuspunkt() {
        let mut camera = Camera2D::new();
        let screen_size = Vec2::new(800.0, 600.0);
        let focus_screen = Vec2::new(600.0, 150.0);
        let focus_world = camera.screen_to_world(focus_screen, screen_size);

        camera.zoom_towards(1.5, focus_world);

        let after = camera.world_to_screen(focus_world, screen_size);
        assert!((after - focus_screen).length() < 1e-2);
    }
}
