//! Viewport-Input-Handling: Maus-Events, Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `drag_primary` — Zeichen-Drag (Start/Update/Ende eines Streckenzugs)
//! - `pointer_delta` — Kamera-Pan über Sekundär-/Mittel-Drag
//! - `zoom` — Scroll-Zoom auf Mausposition

mod drag_primary;
mod pointer_delta;
mod zoom;

use crate::app::AppIntent;
use crate::core::Camera2D;
use crate::shared::GameOptions;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera2D,
    pub options: &'a GameOptions,
}

/// Verwaltet den Input-Zustand für das Viewport (Zeichen-Drag, Scroll).
#[derive(Default)]
pub struct InputState {
    /// Ein Primär-Drag zeichnet gerade
    pub(crate) drawing: bool,
    /// Letzte bekannte Zeigerposition in Weltkoordinaten während des Zeichnens
    last_pointer_world: Option<glam::Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Drag-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        options: &GameOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        self.handle_drag_start(&ctx, &mut events);
        self.handle_drag_update(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
