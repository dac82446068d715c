use crate::shared::GameOptions;

/// Commands sind die mutierenden Operationen auf dem AppState.
/// Sie entstehen ausschließlich über das Intent-Mapping.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Zeichnen ===
    /// Neuen Streckenzug beginnen (inkl. Endpunkt-Snapping)
    BeginStroke { world_pos: glam::Vec2 },
    /// Aktiven Streckenzug fortsetzen (Vorschau + Schwellwert-Commit)
    ExtendStroke { world_pos: glam::Vec2 },
    /// Aktiven Streckenzug abschließen und validieren
    FinishStroke { world_pos: glam::Vec2 },
    /// Letzten Streckenzug entfernen
    UndoStroke,

    // === Rennen ===
    /// Entwurf → Rennen
    StartRace,
    /// Rennen → Entwurf
    StopRace,
    /// Physik-Tick mit Münz- und Fallprüfung
    AdvanceSimulation { dt: f32 },
    /// Münzfeld neu auswürfeln
    RespawnCoins,

    // === Kamera & Viewport ===
    SetViewportSize { size: [f32; 2] },
    PanCamera { delta: glam::Vec2 },
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    ZoomIn,
    ZoomOut,
    ResetCamera,

    // === Dialoge & Anwendungssteuerung ===
    OpenOptionsDialog,
    CloseOptionsDialog,
    ApplyOptions { options: GameOptions },
    ResetOptions,
    RequestExit,
}
