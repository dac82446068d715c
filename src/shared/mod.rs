//! Geteilte Infrastruktur: Laufzeit-Optionen und Rekord-Persistenz.

pub mod highscore;
pub mod options;

pub use highscore::ScoreBoard;
pub use options::GameOptions;
