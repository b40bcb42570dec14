//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod bounds;
pub mod options;
mod render_scene;

pub use bounds::DataBounds;
pub use options::DemoOptions;
pub use options::{PICK_TOLERANCE, SAMPLE_COUNT, SAMPLE_COUNT_MAX, SAMPLE_COUNT_MIN};
pub use render_scene::RenderScene;
