//! Renn-Zustandsmaschine: Entwurfsmodus ↔ Rennmodus, Punktestand, Fallerkennung.

/// Phase des Spiels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RacePhase {
    /// Streckenbau aktiv, Fahrzeug geparkt
    #[default]
    Designing,
    /// Fahrzeug freigegeben, Streckenbau gesperrt
    Running,
}

/// Zustand einer Renn-Session.
///
/// Die Übergänge sind explizite Funktionen und melden zurück, ob sie
/// gewirkt haben; redundante Aufrufe sind No-ops, keine Fehler.
#[derive(Debug, Clone)]
pub struct RaceSession {
    phase: RacePhase,
    score: u32,
    /// Fallschwelle: unterhalb dieser Y-Koordinate endet das Rennen.
    /// `f32::INFINITY` (leere Strecke) gilt als unerreichbar.
    min_height: f32,
    /// Der aktuelle Punktestand hat den gespeicherten Rekord übertroffen
    pub new_record: bool,
}

impl RaceSession {
    /// Erstellt eine Session im Entwurfsmodus.
    pub fn new() -> Self {
        Self {
            phase: RacePhase::Designing,
            score: 0,
            min_height: f32::INFINITY,
            new_record: false,
        }
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> RacePhase {
        self.phase
    }

    /// Gibt `true` zurück, wenn gerade ein Rennen läuft.
    pub fn is_running(&self) -> bool {
        self.phase == RacePhase::Running
    }

    /// Aktueller Punktestand.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Aktive Fallschwelle.
    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    /// Entwurf → Rennen. No-op wenn bereits ein Rennen läuft.
    ///
    /// Die Fallschwelle wird aus der Streckentiefe minus `fall_margin`
    /// berechnet; eine unendliche Streckentiefe (leere Strecke) lässt das
    /// Rennen ohne Fallerkennung laufen.
    pub fn start(&mut self, track_min_height: f32, fall_margin: f32) -> bool {
        if self.is_running() {
            return false;
        }
        self.min_height = track_min_height - fall_margin;
        self.new_record = false;
        self.phase = RacePhase::Running;
        true
    }

    /// Rennen → Entwurf. Idempotent: No-op wenn kein Rennen läuft.
    /// Setzt den Punktestand auf 0 zurück.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = RacePhase::Designing;
        self.score = 0;
        true
    }

    /// Fallerkennung für die aktuelle Fahrzeughöhe.
    ///
    /// Nur ein endliches `min_height` kann unterschritten werden; der
    /// Unendlich-Sentinel der leeren Strecke schaltet die Erkennung ab.
    pub fn has_fallen(&self, vehicle_y: f32) -> bool {
        self.is_running() && self.min_height.is_finite() && vehicle_y < self.min_height
    }

    /// Addiert gesammelte Punkte zum Punktestand.
    pub fn add_points(&mut self, points: u32) {
        self.score += points;
    }
}

impl Default for RaceSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase_is_designing() {
        let session = RaceSession::new();
        assert_eq!(session.phase(), RacePhase::Designing);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_start_computes_fall_threshold() {
        let mut session = RaceSession::new();
        assert!(session.start(-3.0, 50.0));
        assert!(session.is_running());
        assert_eq!(session.min_height(), -53.0);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut session = RaceSession::new();
        assert!(session.start(0.0, 50.0));
        session.add_points(3);

        // Zweiter Start wirkt nicht und lässt den Punktestand unberührt
        assert!(!session.start(100.0, 50.0));
        assert_eq!(session.min_height(), -50.0);
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut session = RaceSession::new();
        session.start(0.0, 50.0);
        session.add_points(5);

        assert!(session.stop());
        assert_eq!(session.phase(), RacePhase::Designing);
        assert_eq!(session.score(), 0);

        // Zweites Stop: gleicher Endzustand, kein Fehler
        assert!(!session.stop());
        assert_eq!(session.phase(), RacePhase::Designing);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_fall_detection_around_threshold() {
        let mut session = RaceSession::new();
        session.start(40.0, 50.0); // min_height = -10

        assert!(session.has_fallen(-11.0));
        assert!(!session.has_fallen(-9.0));
    }

    #[test]
    fn test_empty_track_disables_fall_detection() {
        let mut session = RaceSession::new();
        session.start(f32::INFINITY, 50.0);

        assert!(session.min_height().is_infinite());
        assert!(!session.has_fallen(-1.0e9));
    }

    #[test]
    fn test_no_fall_detection_while_designing() {
        let mut session = RaceSession::new();
        session.start(0.0, 50.0);
        session.stop();
        assert!(!session.has_fallen(-1000.0));
    }
}
