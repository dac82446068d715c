//! Handler für Dialoge und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::GameOptions;

/// Öffnet den Options-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Options-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt geänderte Optionen und persistiert sie.
pub fn apply_options(state: &mut AppState, options: GameOptions) -> anyhow::Result<()> {
    state.options = options;
    state.options.save_to_file(&GameOptions::config_path())?;
    Ok(())
}

/// Setzt die Optionen auf die Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = GameOptions::default();
    state.options.save_to_file(&GameOptions::config_path())?;
    Ok(())
}

/// Markiert die Anwendung zum Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
