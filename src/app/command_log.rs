//! Protokoll der ausgeführten Commands.
//!
//! Dient der Diagnose: die letzten Commands lassen sich im Log bzw. im
//! Debugger nachvollziehen. Das Protokoll ist begrenzt und verwirft bei
//! Überlauf die älteste Hälfte.

use crate::app::events::AppCommand;

/// Maximale Anzahl protokollierter Commands.
const MAX_ENTRIES: usize = 1000;

/// Ringartiges Protokoll der zuletzt ausgeführten Commands.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Protokolliert einen Command. Bei Überlauf wird die älteste
    /// Hälfte verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.drain(..MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Bisher protokollierte Commands (älteste zuerst).
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
