//! UI-Komponenten: Bedienleiste, Viewport-Input, Szenen-Darstellung, Dialoge.

pub mod input;
pub mod options_dialog;
pub mod paint;
pub mod panels;

pub use input::InputState;
pub use options_dialog::show_options_dialog;
pub use paint::draw_scene;
pub use panels::render_top_panel;
