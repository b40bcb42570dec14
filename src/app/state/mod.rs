//! Anwendungszustand: Kontrollpunkte, Drag-Zustand, Laufzeit-Flags.

mod app_state;
mod drag;

pub use app_state::AppState;
pub use drag::DragState;
