//! Streaming-Kurvenvereinfachung für einen gezeichneten Streckenzug.
//!
//! Ein `TrackStroke` sammelt aus einem hochfrequenten Zeiger-Strom eine
//! minimale Folge fester Vertices. Kandidaten werden nur übernommen, wenn
//! Distanz- oder Winkel-Schwellen es verlangen; der jeweils aktuelle
//! Zeichenpunkt bleibt als separater Vorschau-Vertex sichtbar.

use glam::Vec2;

/// Schwellwerte der Kurvenvereinfachung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplifyParams {
    /// Mindestabstand zum letzten Vertex, bevor überhaupt committet wird
    pub min_distance: f32,
    /// Ab diesem Abstand wird bedingungslos committet (Segmentlängen-Deckel)
    pub max_distance: f32,
    /// Maximale Winkelabweichung in Grad, bevor eine Kurve einen Vertex erzwingt
    pub max_angle_difference_deg: f32,
    /// Distanz-Verstärkung solange nur ein Vertex existiert
    /// (das erste Segment hat noch keine Richtung für den Winkeltest)
    pub first_segment_boost: f32,
}

impl SimplifyParams {
    /// Standard-Mindestabstand in Welteinheiten.
    pub const MIN_DISTANCE: f32 = 0.25;
    /// Standard-Maximalabstand in Welteinheiten.
    pub const MAX_DISTANCE: f32 = 2.0;
    /// Standard-Winkel-Schwelle in Grad.
    pub const MAX_ANGLE_DIFFERENCE_DEG: f32 = 10.0;
    /// Standard-Verstärkungsfaktor für das erste Segment.
    pub const FIRST_SEGMENT_BOOST: f32 = 3.0;
}

impl Default for SimplifyParams {
    fn default() -> Self {
        Self {
            min_distance: Self::MIN_DISTANCE,
            max_distance: Self::MAX_DISTANCE,
            max_angle_difference_deg: Self::MAX_ANGLE_DIFFERENCE_DEG,
            first_segment_boost: Self::FIRST_SEGMENT_BOOST,
        }
    }
}

/// Ein kontinuierlich gezeichneter Streckenzug (Pointer-Down bis Pointer-Up).
#[derive(Debug, Clone, Default)]
pub struct TrackStroke {
    /// Feste, einfügegeordnete Vertices
    committed: Vec<Vec2>,
    /// Aktueller Zeichenpunkt, noch nicht committet
    preview: Option<Vec2>,
}

/// Kürzeste vorzeichenbehaftete Winkeldifferenz in Grad, Ergebnis in (-180, 180].
fn delta_angle_deg(from: f32, to: f32) -> f32 {
    let mut delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Richtungswinkel eines Vektors gegen die positive X-Achse in Grad.
fn direction_angle_deg(v: Vec2) -> f32 {
    v.y.atan2(v.x).to_degrees()
}

impl TrackStroke {
    /// Startet einen Streckenzug mit `point` als Vertex 0.
    pub fn begin(point: Vec2) -> Self {
        Self {
            committed: vec![point],
            preview: None,
        }
    }

    /// Setzt den Vorschau-Vertex. Wird bei jeder Zeigerbewegung aufgerufen
    /// und ersetzt den vorherigen Vorschau-Punkt vollständig.
    pub fn update_preview(&mut self, point: Vec2) {
        self.preview = Some(point);
    }

    /// Entscheidet, ob `point` als neuer Vertex committet werden muss.
    ///
    /// Reihenfolge der Prüfungen:
    /// 1. Unterhalb `min_distance` nie (verhindert Mikro-Segmente).
    /// 2. Solange nur ein Vertex existiert, wird die Distanz mit
    ///    `first_segment_boost` multipliziert, bevor der Deckel greift.
    /// 3. Oberhalb `max_distance` immer.
    /// 4. Sonst, ab zwei Vertices: Winkeltest gegen die letzte Segmentrichtung.
    pub fn should_commit(&self, point: Vec2, params: &SimplifyParams) -> bool {
        let Some(&last) = self.committed.last() else {
            return false;
        };

        let mut distance = (point - last).length();
        if distance < params.min_distance {
            return false;
        }

        if self.committed.len() <= 1 {
            distance *= params.first_segment_boost;
        }

        if distance > params.max_distance {
            return true;
        }

        if self.committed.len() <= 1 {
            return false;
        }

        let previous = self.committed[self.committed.len() - 2];
        let current_angle = direction_angle_deg(point - last);
        let previous_angle = direction_angle_deg(last - previous);
        delta_angle_deg(previous_angle, current_angle).abs() > params.max_angle_difference_deg
    }

    /// Committet `point` als neuen festen Vertex.
    pub fn commit(&mut self, point: Vec2) {
        self.committed.push(point);
    }

    /// Schließt den Streckenzug ab: der Lösepunkt wird immer committet,
    /// unabhängig von allen Schwellwerten, und die Vorschau gelöscht.
    pub fn end(&mut self, point: Vec2) {
        self.committed.push(point);
        self.preview = None;
    }

    /// Gültig ab zwei festen Vertices.
    pub fn is_valid(&self) -> bool {
        self.committed.len() >= 2
    }

    /// Feste Vertices in Einfügereihenfolge.
    pub fn points(&self) -> &[Vec2] {
        &self.committed
    }

    /// Anzahl fester Vertices.
    pub fn point_count(&self) -> usize {
        self.committed.len()
    }

    /// Letzter fester Vertex.
    pub fn last_point(&self) -> Option<Vec2> {
        self.committed.last().copied()
    }

    /// Aktueller Vorschau-Vertex (nur während des Zeichnens gesetzt).
    pub fn preview(&self) -> Option<Vec2> {
        self.preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_begin_commits_first_vertex() {
        let stroke = TrackStroke::begin(Vec2::new(1.0, 2.0));
        assert_eq!(stroke.point_count(), 1);
        assert_eq!(stroke.points()[0], Vec2::new(1.0, 2.0));
        assert!(!stroke.is_valid());
    }

    #[test]
    fn test_preview_is_not_committed() {
        let mut stroke = TrackStroke::begin(Vec2::ZERO);
        stroke.update_preview(Vec2::new(0.1, 0.0));
        assert_eq!(stroke.point_count(), 1);
        assert_eq!(stroke.preview(), Some(Vec2::new(0.1, 0.0)));

        // Jede Bewegung ersetzt die Vorschau
        stroke.update_preview(Vec2::new(0.2, 0.0));
        assert_eq!(stroke.preview(), Some(Vec2::new(0.2, 0.0)));
    }

    #[test]
    fn test_below_min_distance_never_commits() {
        let params = SimplifyParams::default();
        let stroke = TrackStroke::begin(Vec2::ZERO);
        assert!(!stroke.should_commit(Vec2::new(0.1, 0.0), &params));
    }

    #[test]
    fn test_first_segment_boost_lowers_distance_cap() {
        let params = SimplifyParams::default();
        let stroke = TrackStroke::begin(Vec2::ZERO);

        // 0.7 * 3 = 2.1 > max_distance → Commit trotz Distanz unter dem Deckel
        assert!(stroke.should_commit(Vec2::new(0.7, 0.0), &params));
        // 0.6 * 3 = 1.8 ≤ max_distance, und kein Winkeltest möglich → kein Commit
        assert!(!stroke.should_commit(Vec2::new(0.6, 0.0), &params));
    }

    #[test]
    fn test_max_distance_commits_unconditionally() {
        let params = SimplifyParams::default();
        let mut stroke = TrackStroke::begin(Vec2::ZERO);
        stroke.commit(Vec2::new(1.0, 0.0));

        // Gerade Fortsetzung, aber Distanz über dem Deckel
        assert!(stroke.should_commit(Vec2::new(3.5, 0.0), &params));
    }

    #[test]
    fn test_straight_run_does_not_commit() {
        let params = SimplifyParams::default();
        let mut stroke = TrackStroke::begin(Vec2::ZERO);
        stroke.commit(Vec2::new(1.0, 0.0));

        // Kollinear, Distanz zwischen min und max → kein neuer Vertex
        assert!(!stroke.should_commit(Vec2::new(2.5, 0.0), &params));
    }

    #[test]
    fn test_turn_beyond_angle_threshold_commits() {
        let params = SimplifyParams::default();
        let mut stroke = TrackStroke::begin(Vec2::ZERO);
        stroke.commit(Vec2::new(1.0, 0.0));

        // Richtung knickt um ~26° ab (atan2(0.5, 1.0)) → über 10°-Schwelle
        assert!(stroke.should_commit(Vec2::new(2.0, 0.5), &params));
        // ~5.7° Knick bleibt unter der Schwelle
        assert!(!stroke.should_commit(Vec2::new(2.0, 0.1), &params));
    }

    #[test]
    fn test_angle_wraps_around_positive_x_axis() {
        let params = SimplifyParams::default();
        let mut stroke = TrackStroke::begin(Vec2::ZERO);
        // Richtung knapp unter der X-Achse (-4°)
        stroke.commit(Vec2::new(1.0, -0.07));

        // Fortsetzung knapp über der X-Achse (+4°): Differenz ~8°, kein Commit
        // trotz Vorzeichenwechsel der Winkel
        assert!(!stroke.should_commit(Vec2::new(2.0, 0.0), &params));
    }

    #[test]
    fn test_end_always_appends_release_point() {
        let mut stroke = TrackStroke::begin(Vec2::ZERO);
        stroke.update_preview(Vec2::new(0.01, 0.0));

        // Weit unter min_distance, trotzdem wird der Lösepunkt fester Vertex
        stroke.end(Vec2::new(0.01, 0.0));

        assert_eq!(stroke.point_count(), 2);
        assert_eq!(stroke.last_point(), Some(Vec2::new(0.01, 0.0)));
        assert!(stroke.preview().is_none());
        assert!(stroke.is_valid());
    }

    #[test]
    fn test_commit_count_is_monotone_over_a_gesture() {
        let params = SimplifyParams::default();
        let mut stroke = TrackStroke::begin(Vec2::ZERO);
        let mut last_count = stroke.point_count();

        // Sinusförmige Geste mit feiner Abtastung
        for i in 1..200 {
            let t = i as f32 * 0.05;
            let p = Vec2::new(t, (t * 1.3).sin() * 2.0);
            stroke.update_preview(p);
            if stroke.should_commit(p, &params) {
                stroke.commit(p);
            }
            assert!(stroke.point_count() >= last_count);
            last_count = stroke.point_count();
        }

        // Die Geste hat deutlich weniger Vertices als Samples
        assert!(stroke.point_count() > 2);
        assert!(stroke.point_count() < 200);
    }

    #[test]
    fn test_delta_angle_shortest_path() {
        assert_relative_eq!(delta_angle_deg(170.0, -170.0), 20.0);
        assert_relative_eq!(delta_angle_deg(-170.0, 170.0), -20.0);
        assert_relative_eq!(delta_angle_deg(10.0, 30.0), 20.0);
        assert_relative_eq!(delta_angle_deg(0.0, 180.0), 180.0);
    }
}
