//! Gesamtzustand der Anwendung.

use glam::Vec2;

use crate::app::command_log::CommandLog;
use crate::core::{Camera2D, CoinField, PhysicsSim, RaceSession, Track};
use crate::physics::RapierSim;
use crate::shared::{GameOptions, ScoreBoard};

/// Zustand des aktiven Zeichenvorgangs.
#[derive(Debug, Default)]
pub struct DrawState {
    /// Ein Primär-Drag zeichnet gerade einen Streckenzug
    pub stroke_active: bool,
}

/// Kamera und Viewport.
#[derive(Debug)]
pub struct ViewState {
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln (vom UI gemeldet)
    pub viewport_size: [f32; 2],
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            camera: Camera2D::default(),
            viewport_size: [1280.0, 720.0],
        }
    }
}

/// Der gesamte veränderliche Anwendungszustand.
///
/// Alle Mutationen laufen über Commands des `AppController`; UI-Code
/// liest den Zustand nur.
pub struct AppState {
    pub track: Track,
    pub coins: CoinField,
    pub race: RaceSession,
    pub view: ViewState,
    pub draw: DrawState,
    pub options: GameOptions,
    pub scoreboard: ScoreBoard,
    /// Physik hinter einem Trait, damit Tests eine Attrappe einsetzen können
    pub physics: Box<dyn PhysicsSim>,
    pub command_log: CommandLog,
    pub show_options_dialog: bool,
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Startzustand mit Rapier-Physik und verstreuten Münzen.
    pub fn new() -> Self {
        let options = GameOptions::load_from_file(&GameOptions::config_path());
        let scoreboard = ScoreBoard::load(ScoreBoard::default_path());
        let spawn = Vec2::from(options.vehicle_spawn);

        let mut rng = rand::thread_rng();
        let coins = CoinField::spawn(
            &mut rng,
            options.coins_to_spawn as usize,
            spawn,
            Vec2::from(options.coin_main_direction),
            options.coin_position_randomness,
        );

        Self {
            track: Track::new(),
            coins,
            race: RaceSession::new(),
            view: ViewState::default(),
            draw: DrawState::default(),
            options,
            scoreboard,
            physics: Box::new(RapierSim::new(spawn)),
            command_log: CommandLog::new(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Erstellt den Zustand mit einer vorgegebenen Physik-Implementierung.
    /// Wird von Tests genutzt, um die Simulation zu skripten.
    pub fn with_physics(physics: Box<dyn PhysicsSim>) -> Self {
        let options = GameOptions::default();
        let spawn = Vec2::from(options.vehicle_spawn);

        let mut rng = rand::thread_rng();
        let coins = CoinField::spawn(
            &mut rng,
            options.coins_to_spawn as usize,
            spawn,
            Vec2::from(options.coin_main_direction),
            options.coin_position_randomness,
        );

        Self {
            track: Track::new(),
            coins,
            race: RaceSession::new(),
            view: ViewState::default(),
            draw: DrawState::default(),
            options,
            scoreboard: ScoreBoard::load(Self::fresh_record_path()),
            physics,
            command_log: CommandLog::new(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Eindeutiger, noch nicht existierender Rekord-Pfad, damit sich
    /// Testläufe nicht gegenseitig den Rekord hinterlassen.
    fn fresh_record_path() -> std::path::PathBuf {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "scribble_racer_record_{}_{}.json",
            std::process::id(),
            n
        ))
    }

    /// Startposition des Fahrzeugs aus den Optionen.
    pub fn vehicle_spawn(&self) -> Vec2 {
        Vec2::from(self.options.vehicle_spawn)
    }
}
