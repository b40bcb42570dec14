//! Handler für den Drag-Lifecycle der Kontrollpunkte.

use crate::app::{AppState, DragState};
use crate::core::CONTROL_POINT_COUNT;
use anyhow::{bail, Context};
use glam::DVec2;

/// Beginnt einen Drag auf Kontrollpunkt `index`.
pub fn begin(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    if index >= CONTROL_POINT_COUNT {
        bail!(
            "Kontrollpunkt-Index {} außerhalb 0..{}",
            index,
            CONTROL_POINT_COUNT
        );
    }
    state.drag = DragState::Dragging(index);
    log::debug!("Drag gestartet: P{}", index);
    state.request_redraw();
    Ok(())
}

/// Setzt den gezogenen Punkt auf `pos`. Ohne aktiven Drag ein No-op.
///
/// Keine Begrenzung auf die Achsen: der Punkt darf aus dem sichtbaren Bereich wandern.
pub fn update(state: &mut AppState, pos: DVec2) -> anyhow::Result<()> {
    let DragState::Dragging(index) = state.drag else {
        log::debug!("Drag-Update ohne aktiven Drag ignoriert");
        return Ok(());
    };
    let point = state
        .control_points
        .get_mut(index)
        .with_context(|| format!("Gezogener Kontrollpunkt P{} existiert nicht", index))?;
    *point = pos;
    log::trace!("P{} → ({:.3}, {:.3})", index, pos.x, pos.y);
    state.request_redraw();
    Ok(())
}

/// Beendet einen Drag. Setzt den Zustand immer auf Idle.
pub fn end(state: &mut AppState) {
    if let DragState::Dragging(index) = state.drag {
        log::debug!("Drag beendet: P{}", index);
    }
    state.drag = DragState::Idle;
    state.request_redraw();
}
