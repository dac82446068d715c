use crate::shared::GameOptions;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primär-Drag begonnen: neuen Streckenzug starten (Weltkoordinaten)
    StrokeStarted { world_pos: glam::Vec2 },
    /// Zeiger während des Zeichnens bewegt
    StrokeMoved { world_pos: glam::Vec2 },
    /// Primär-Drag beendet: Streckenzug abschließen
    StrokeFinished { world_pos: glam::Vec2 },
    /// Letzten Streckenzug entfernen
    UndoRequested,
    /// Rennen starten
    StartRaceRequested,
    /// Rennen abbrechen und zurück in den Entwurfsmodus
    StopRaceRequested,
    /// Münzfeld neu auswürfeln
    RespawnCoinsRequested,
    /// Ein Frame ist vergangen (treibt die Physik während des Rennens)
    FrameAdvanced { dt: f32 },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Geänderte Optionen übernehmen und speichern
    OptionsChanged { options: GameOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
