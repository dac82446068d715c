//! Persistenter Punkterekord.
//!
//! Ein einzelner Integer-Rekord, beim Start gelesen und immer dann
//! geschrieben, wenn der aktuelle Punktestand ihn übertrifft.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Serialisierte Form der Rekord-Datei.
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    record: u32,
}

/// Verwaltet den gespeicherten Rekord und dessen Datei.
#[derive(Debug)]
pub struct ScoreBoard {
    record: u32,
    path: PathBuf,
}

impl ScoreBoard {
    /// Lädt den Rekord aus `path`. Fehlende oder fehlerhafte Datei → Rekord 0.
    pub fn load(path: PathBuf) -> Self {
        let record = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<StoredRecord>(&content) {
                Ok(stored) => {
                    log::info!("Rekord geladen: {} ({})", stored.record, path.display());
                    stored.record
                }
                Err(e) => {
                    log::warn!("Rekord-Datei fehlerhaft, starte bei 0: {}", e);
                    0
                }
            },
            Err(_) => {
                log::info!("Keine Rekord-Datei gefunden, starte bei 0");
                0
            }
        };
        Self { record, path }
    }

    /// Aktuell gespeicherter Rekord.
    pub fn record(&self) -> u32 {
        self.record
    }

    /// Meldet einen Punktestand.
    ///
    /// Übertrifft er den Rekord, wird dieser übernommen und persistiert;
    /// Rückgabe `true` genau dann. Schreibfehler kosten nur den Persistenz-
    /// Effekt, nicht den Frame.
    pub fn submit(&mut self, score: u32) -> bool {
        if score <= self.record {
            return false;
        }
        self.record = score;
        if let Err(e) = self.save() {
            log::warn!("Rekord konnte nicht gespeichert werden: {:#}", e);
        }
        true
    }

    /// Schreibt den Rekord in die Datei.
    fn save(&self) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(&StoredRecord {
            record: self.record,
        })?;
        std::fs::write(&self.path, content)?;
        log::info!("Neuer Rekord gespeichert: {}", self.record);
        Ok(())
    }

    /// Ermittelt den Pfad zur Rekord-Datei neben der Binary.
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("scribble_racer"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("scribble_racer_record.json")
    }
}
