//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Zeichnen ===
            AppCommand::BeginStroke { world_pos } => handlers::drawing::begin_stroke(state, world_pos),
            AppCommand::ExtendStroke { world_pos } => {
                handlers::drawing::extend_stroke(state, world_pos)
            }
            AppCommand::FinishStroke { world_pos } => {
                handlers::drawing::finish_stroke(state, world_pos)
            }
            AppCommand::UndoStroke => handlers::drawing::undo_stroke(state),

            // === Rennen ===
            AppCommand::StartRace => handlers::race::start_race(state),
            AppCommand::StopRace => handlers::race::stop_race(state),
            AppCommand::AdvanceSimulation { dt } => handlers::race::advance_simulation(state, dt),
            AppCommand::RespawnCoins => handlers::race::respawn_coins(state),

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::app_control::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::app_control::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::app_control::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::app_control::reset_options(state)?,
            AppCommand::RequestExit => handlers::app_control::request_exit(state),
        }

        Ok(())
    }
}
