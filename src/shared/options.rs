//! Zentrale Konfiguration für Scribble Racer.
//!
//! `GameOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::SimplifyParams;
use serde::{Deserialize, Serialize};

// ── Zeichnen ────────────────────────────────────────────────────────

/// Snap-Radius (Welteinheiten): neue Streckenzüge rasten innerhalb dieses
/// Radius auf einen existierenden Vertex ein.
pub const SNAP_RANGE: f32 = 1.0;

// ── Rennen ──────────────────────────────────────────────────────────

/// Puffer unterhalb des tiefsten Streckenpunkts, bevor ein Sturz erkannt wird.
pub const FALL_MARGIN: f32 = 50.0;
/// Startposition des Fahrzeugs in Weltkoordinaten.
pub const VEHICLE_SPAWN: [f32; 2] = [0.0, 1.0];

// ── Münzen ──────────────────────────────────────────────────────────

/// Anzahl der beim Start verstreuten Münzen.
pub const COINS_TO_SPAWN: u32 = 20;
/// Zufallsanteil pro Achse bei der Münzplatzierung.
pub const COIN_POSITION_RANDOMNESS: f32 = 6.0;
/// Hauptrichtung der Münzverteilung.
pub const COIN_MAIN_DIRECTION: [f32; 2] = [5.0, -8.0];
/// Kontakt-Basisradius einer Münze in Welteinheiten.
pub const COIN_RADIUS: f32 = 0.6;

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor (weiteste Ansicht).
pub const CAMERA_ZOOM_MIN: f32 = 0.6;
/// Maximaler Zoom-Faktor (nächste Ansicht).
pub const CAMERA_ZOOM_MAX: f32 = 8.0;
/// Zoom-Schritt bei Menü-Buttons / Shortcuts.
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt pro Mausrad-Raste.
pub const SCROLL_ZOOM_STEP: f32 = 1.1;
/// Verfolgungs-Zoom bei stehendem Fahrzeug.
pub const FOLLOW_ZOOM_NEAR: f32 = 8.0;
/// Verfolgungs-Zoom ab `FOLLOW_SPEED_FOR_FAR`.
pub const FOLLOW_ZOOM_FAR: f32 = 2.0;
/// Geschwindigkeit, bei der der weiteste Verfolgungs-Zoom erreicht ist.
pub const FOLLOW_SPEED_FOR_FAR: f32 = 6.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Spiel-Optionen.
/// Wird als `scribble_racer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameOptions {
    // ── Kurvenvereinfachung ─────────────────────────────────────
    /// Mindestabstand zum letzten Vertex
    pub min_distance: f32,
    /// Maximalabstand, ab dem bedingungslos committet wird
    pub max_distance: f32,
    /// Winkel-Schwelle in Grad
    pub max_angle_difference_deg: f32,
    /// Distanz-Verstärkung für das erste Segment
    pub first_segment_boost: f32,
    /// Snap-Radius für Streckenzug-Anfänge
    pub snap_range: f32,

    // ── Rennen ──────────────────────────────────────────────────
    /// Puffer unterhalb des tiefsten Streckenpunkts
    pub fall_margin: f32,
    /// Startposition des Fahrzeugs
    pub vehicle_spawn: [f32; 2],

    // ── Münzen ──────────────────────────────────────────────────
    /// Anzahl zu verstreuender Münzen
    pub coins_to_spawn: u32,
    /// Zufallsanteil der Münzplatzierung
    pub coin_position_randomness: f32,
    /// Hauptrichtung der Münzverteilung
    pub coin_main_direction: [f32; 2],
    /// Kontakt-Basisradius einer Münze
    pub coin_radius: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt pro Mausrad-Raste
    #[serde(default = "default_scroll_zoom_step")]
    pub scroll_zoom_step: f32,
    /// Verfolgungs-Zoom bei stehendem Fahrzeug
    #[serde(default = "default_follow_zoom_near")]
    pub follow_zoom_near: f32,
    /// Verfolgungs-Zoom bei voller Geschwindigkeit
    #[serde(default = "default_follow_zoom_far")]
    pub follow_zoom_far: f32,
    /// Geschwindigkeit für den weitesten Verfolgungs-Zoom
    #[serde(default = "default_follow_speed_for_far")]
    pub follow_speed_for_far: f32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            min_distance: SimplifyParams::MIN_DISTANCE,
            max_distance: SimplifyParams::MAX_DISTANCE,
            max_angle_difference_deg: SimplifyParams::MAX_ANGLE_DIFFERENCE_DEG,
            first_segment_boost: SimplifyParams::FIRST_SEGMENT_BOOST,
            snap_range: SNAP_RANGE,

            fall_margin: FALL_MARGIN,
            vehicle_spawn: VEHICLE_SPAWN,

            coins_to_spawn: COINS_TO_SPAWN,
            coin_position_randomness: COIN_POSITION_RANDOMNESS,
            coin_main_direction: COIN_MAIN_DIRECTION,
            coin_radius: COIN_RADIUS,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            scroll_zoom_step: SCROLL_ZOOM_STEP,
            follow_zoom_near: FOLLOW_ZOOM_NEAR,
            follow_zoom_far: FOLLOW_ZOOM_FAR,
            follow_speed_for_far: FOLLOW_SPEED_FOR_FAR,
        }
    }
}

/// Serde-Default für `scroll_zoom_step` (Abwärtskompatibilität).
fn default_scroll_zoom_step() -> f32 {
    SCROLL_ZOOM_STEP
}

/// Serde-Default für `follow_zoom_near` (Abwärtskompatibilität).
fn default_follow_zoom_near() -> f32 {
    FOLLOW_ZOOM_NEAR
}

/// Serde-Default für `follow_zoom_far` (Abwärtskompatibilität).
fn default_follow_zoom_far() -> f32 {
    FOLLOW_ZOOM_FAR
}

/// Serde-Default für `follow_speed_for_far` (Abwärtskompatibilität).
fn default_follow_speed_for_far() -> f32 {
    FOLLOW_SPEED_FOR_FAR
}

impl GameOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("scribble_racer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("scribble_racer.toml")
    }

    /// Zoom-Faktor für ein vertikales Scroll-Delta.
    ///
    /// `None` ohne Scroll; nach oben wird hinein-, nach unten
    /// herausgezoomt.
    pub fn scroll_zoom_factor(&self, scroll_y: f32) -> Option<f32> {
        if scroll_y == 0.0 {
            None
        } else if scroll_y > 0.0 {
            Some(self.scroll_zoom_step)
        } else {
            Some(1.0 / self.scroll_zoom_step)
        }
    }

    /// Schwellwerte der Kurvenvereinfachung aus den Optionen.
    pub fn simplify_params(&self) -> SimplifyParams {
        SimplifyParams {
            min_distance: self.min_distance,
            max_distance: self.max_distance,
            max_angle_difference_deg: self.max_angle_difference_deg,
            first_segment_boost: self.first_segment_boost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let opts = GameOptions::default();
        assert_eq!(opts.snap_range, SNAP_RANGE);
        assert_eq!(opts.fall_margin, FALL_MARGIN);
        assert_eq!(opts.simplify_params(), SimplifyParams::default());
    }

    #[test]
    fn test_scroll_zoom_factor_follows_scroll_direction() {
        let opts = GameOptions::default();
        assert_eq!(opts.scroll_zoom_factor(0.0), None);
        assert_eq!(opts.scroll_zoom_factor(3.0), Some(opts.scroll_zoom_step));
        assert_eq!(
            opts.scroll_zoom_factor(-3.0),
            Some(1.0 / opts.scroll_zoom_step)
        );
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut opts = GameOptions::default();
        opts.max_distance = 3.5;
        opts.coins_to_spawn = 7;

        let text = toml::to_string_pretty(&opts).expect("Serialisierung sollte funktionieren");
        let back: GameOptions = toml::from_str(&text).expect("Parsen sollte funktionieren");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let opts =
            GameOptions::load_from_file(std::path::Path::new("/nonexistent/scribble_racer.toml"));
        assert_eq!(opts, GameOptions::default());
    }
}
