//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Hier liegt die Moduslogik: Streckenbau-Intents werden während eines
/// laufenden Rennens verworfen, der Physik-Tick nur während eines Rennens
/// weitergereicht.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // === Zeichnen: nur im Entwurfsmodus ===
        AppIntent::StrokeStarted { world_pos } => {
            if state.race.is_running() {
                vec![]
            } else {
                vec![AppCommand::BeginStroke { world_pos }]
            }
        }
        AppIntent::StrokeMoved { world_pos } => {
            if state.race.is_running() {
                vec![]
            } else {
                vec![AppCommand::ExtendStroke { world_pos }]
            }
        }
        AppIntent::StrokeFinished { world_pos } => {
            if state.race.is_running() {
                vec![]
            } else {
                vec![AppCommand::FinishStroke { world_pos }]
            }
        }
        AppIntent::UndoRequested => {
            if state.race.is_running() {
                vec![]
            } else {
                vec![AppCommand::UndoStroke]
            }
        }
        AppIntent::RespawnCoinsRequested => {
            if state.race.is_running() {
                vec![]
            } else {
                vec![AppCommand::RespawnCoins]
            }
        }

        // === Rennen ===
        AppIntent::StartRaceRequested => vec![AppCommand::StartRace],
        AppIntent::StopRaceRequested => vec![AppCommand::StopRace],
        AppIntent::FrameAdvanced { dt } => {
            if state.race.is_running() {
                vec![AppCommand::AdvanceSimulation { dt }]
            } else {
                vec![]
            }
        }

        // === Kamera & Viewport ===
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],

        // === Dialoge & Anwendungssteuerung ===
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
