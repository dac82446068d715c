//! Feature-Handler: führen Commands auf dem AppState aus.

pub mod app_control;
pub mod drawing;
pub mod race;
pub mod view;
