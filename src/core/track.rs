//! Die Strecke: geordnete Sammlung gezeichneter Streckenzüge.
//!
//! Verwaltet den Stroke-Lebenszyklus (Beginn mit Endpunkt-Snapping,
//! Fortsetzung über die Kurvenvereinfachung, Abschluss mit Validierung),
//! Einzelschritt-Undo und streckenweite Aggregate (Minimalhöhe).

use super::stroke::{SimplifyParams, TrackStroke};
use glam::Vec2;

/// Geordnete Sammlung von Streckenzügen (Einfügereihenfolge = Zeichenreihenfolge).
#[derive(Debug, Clone, Default)]
pub struct Track {
    strokes: Vec<TrackStroke>,
}

impl Track {
    /// Erstellt eine leere Strecke.
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Sucht einen existierenden Vertex innerhalb von `snap_range` um `candidate`.
    ///
    /// Durchsucht die Streckenzüge vom zuletzt erstellten rückwärts, und
    /// innerhalb jedes Zugs die Vertices rückwärts; der erste Treffer gewinnt.
    pub fn snap_to_existing(&self, candidate: Vec2, snap_range: f32) -> Option<Vec2> {
        for stroke in self.strokes.iter().rev() {
            for &point in stroke.points().iter().rev() {
                if (point - candidate).length() < snap_range {
                    return Some(point);
                }
            }
        }
        None
    }

    /// Beginnt einen neuen Streckenzug an `candidate`.
    ///
    /// Liegt ein existierender Vertex innerhalb von `snap_range`, übernimmt
    /// der neue Zug dessen exakte Koordinaten als Startpunkt (Endpunkt-Snapping,
    /// damit sich Schleifen und Anschlüsse präzise schließen lassen).
    /// Gibt den tatsächlich verwendeten Startpunkt zurück.
    pub fn begin_stroke(&mut self, candidate: Vec2, snap_range: f32) -> Vec2 {
        let start = self.snap_to_existing(candidate, snap_range).unwrap_or(candidate);
        self.strokes.push(TrackStroke::begin(start));
        start
    }

    /// Setzt den aktiven (zuletzt erstellten) Streckenzug fort:
    /// Vorschau aktualisieren, dann nach Schwellwert-Politik committen.
    pub fn continue_stroke(&mut self, point: Vec2, params: &SimplifyParams) {
        let Some(stroke) = self.strokes.last_mut() else {
            return;
        };
        stroke.update_preview(point);
        if stroke.should_commit(point, params) {
            stroke.commit(point);
        }
    }

    /// Schließt den aktiven Streckenzug am Lösepunkt ab.
    ///
    /// Der Lösepunkt wird immer committet; bleibt der Zug trotzdem ungültig
    /// (<2 Vertices), wird er verworfen. Gibt `true` zurück, wenn der Zug
    /// erhalten bleibt.
    pub fn end_stroke(&mut self, point: Vec2) -> bool {
        let Some(stroke) = self.strokes.last_mut() else {
            return false;
        };
        stroke.end(point);
        if stroke.is_valid() {
            true
        } else {
            self.strokes.pop();
            false
        }
    }

    /// Entfernt den zuletzt erstellten Streckenzug (gültig oder nicht).
    /// No-op bei leerer Strecke; gibt `true` zurück, wenn etwas entfernt wurde.
    pub fn undo(&mut self) -> bool {
        self.strokes.pop().is_some()
    }

    /// Minimale Y-Koordinate über alle festen Vertices aller Streckenzüge.
    ///
    /// Leere Strecke → `f32::INFINITY` als Sentinel; der Aufrufer behandelt
    /// die Fallschwelle dann als unerreichbar.
    pub fn min_height(&self) -> f32 {
        let mut min = f32::INFINITY;
        for stroke in &self.strokes {
            for point in stroke.points() {
                if point.y < min {
                    min = point.y;
                }
            }
        }
        min
    }

    /// Vertex-Listen aller gültigen Streckenzüge für den Kollisionsflächen-Aufbau.
    pub fn collision_polylines(&self) -> Vec<Vec<Vec2>> {
        self.strokes
            .iter()
            .filter(|s| s.is_valid())
            .map(|s| s.points().to_vec())
            .collect()
    }

    /// Alle Streckenzüge in Zeichenreihenfolge.
    pub fn strokes(&self) -> &[TrackStroke] {
        &self.strokes
    }

    /// Der aktive (zuletzt erstellte) Streckenzug.
    pub fn active_stroke(&self) -> Option<&TrackStroke> {
        self.strokes.last()
    }

    /// Anzahl der Streckenzüge.
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Gibt `true` zurück, wenn keine Streckenzüge existieren.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Gesamtzahl fester Vertices (für Statusanzeige).
    pub fn vertex_count(&self) -> usize {
        self.strokes.iter().map(|s| s.point_count()).sum()
    }
}
