//! 2D-Kamera für Pan und Zoom.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom.
///
/// Die Welt ist Y-up, der Bildschirm Y-down; die Umrechnungen
/// `screen_to_world`/`world_to_screen` spiegeln die Y-Achse.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Sichtbare Welt-Halbhöhe bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f32 = 24.0;
    /// Minimaler Zoom-Faktor (weiteste Ansicht).
    pub const ZOOM_MIN: f32 = 0.6;
    /// Maximaler Zoom-Faktor (nächste Ansicht).
    pub const ZOOM_MAX: f32 = 8.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level mit den eingebauten Grenzen
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom_by_clamped(factor, Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Ändert den Zoom-Level mit konfigurierbaren Grenzen
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
    }

    /// Setzt den Zoom direkt (geklammert auf konfigurierbare Grenzen)
    pub fn set_zoom_clamped(&mut self, zoom: f32, min: f32, max: f32) {
        self.zoom = zoom.clamp(min, max);
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    /// Berücksichtigt BASE_WORLD_EXTENT, Zoom und Aspekt-Ratio.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        // Screen-Koordinaten zentrieren (-1 bis 1)
        let ndc = (screen_pos / screen_size) * 2.0 - Vec2::ONE;
        let aspect = screen_size.x / screen_size.y;
        // NDC → Welt: skaliert mit BASE_WORLD_EXTENT / zoom, Y gespiegelt
        Vec2::new(
            ndc.x * Self::BASE_WORLD_EXTENT * aspect / self.zoom,
            -ndc.y * Self::BASE_WORLD_EXTENT / self.zoom,
        ) + self.position
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (Inverse von `screen_to_world`).
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let aspect = screen_size.x / screen_size.y;
        let rel = world_pos - self.position;
        let ndc = Vec2::new(
            rel.x * self.zoom / (Self::BASE_WORLD_EXTENT * aspect),
            -rel.y * self.zoom / Self::BASE_WORLD_EXTENT,
        );
        (ndc + Vec2::ONE) / 2.0 * screen_size
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height)
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
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_pan() {
        let mut camera = Camera2D::new();
        camera.pan(Vec2::new(10.0, 5.0));
        assert_relative_eq!(camera.position.x, 10.0);
        assert_relative_eq!(camera.position.y, 5.0);
    }

    #[test]
    fn test_camera_zoom_clamps() {
        let mut camera = Camera2D::new();
        camera.zoom_by(2.0);
        assert_relative_eq!(camera.zoom, 2.0);

        camera.zoom_by(100.0);
        assert_relative_eq!(camera.zoom, Camera2D::ZOOM_MAX);

        camera.zoom_by(1e-6);
        assert_relative_eq!(camera.zoom, Camera2D::ZOOM_MIN);
    }

    #[test]
    fn test_screen_to_world_center() {
        let camera = Camera2D::new(); // pos=0, zoom=1
        let screen_size = Vec2::new(800.0, 600.0);
        // Bildschirm-Mitte → Welt-Ursprung
        let world = camera.screen_to_world(Vec2::new(400.0, 300.0), screen_size);
        assert_relative_eq!(world.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(world.y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_screen_to_world_flips_y() {
        let camera = Camera2D::new();
        let screen_size = Vec2::new(800.0, 600.0);
        // Punkt oberhalb der Bildschirmmitte liegt in der Welt über dem Ursprung
        let world = camera.screen_to_world(Vec2::new(400.0, 0.0), screen_size);
        assert!(world.y > 0.0);
    }

    #[test]
    fn test_world_screen_roundtrip() {
        let mut camera = Camera2D::new();
        camera.position = Vec2::new(12.0, -7.0);
        camera.zoom = 2.5;
        let screen_size = Vec2::new(1280.0, 720.0);
        let world = Vec2::new(20.0, -15.0);

        let screen = camera.world_to_screen(world, screen_size);
        let back = camera.screen_to_world(screen, screen_size);

        assert_relative_eq!(back.x, world.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, world.y, epsilon = 1e-3);
    }

    #[test]
    fn test_world_per_pixel() {
        let mut camera = Camera2D::new();
        let wpp1 = camera.world_per_pixel(600.0);
        camera.zoom = 2.0;
        let wpp2 = camera.world_per_pixel(600.0);
        // Doppelter Zoom → halb so viele Welt-Einheiten pro Pixel
        assert_relative_eq!(wpp2, wpp1 / 2.0);
    }
}
