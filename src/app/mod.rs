//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Kontrollpunkte, Drag, Flags).
pub mod state;
pub mod surface;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, DragState};
pub use surface::{PointerDispatcher, PointerEvent, PointerEventKind, PointerHandler, PointerSurface};
