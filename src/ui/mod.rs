//! UI-Komponenten: Plot-Canvas, Status-Bar, Keyboard-Shortcuts.

pub mod canvas;
mod keyboard;
/// UI-Layer mit egui
///
/// Sammelt Eingaben als `AppIntent`s bzw. `PointerEvent`s; mutiert keinen State.
pub mod status;

pub use canvas::{render_canvas, screen_to_data};
pub use keyboard::collect_keyboard_intents;
pub use status::render_status_bar;
