//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Die Kurve wird dabei jedes Mal vollständig neu abgetastet.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        bounds: state.options.bounds(),
        curve: state.sampled_curve(),
        control_points: state.control_points,
        dragged_index: state.drag.dragged_index(),
        options: state.options.clone(),
    }
}
