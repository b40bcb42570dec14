//! Handler für Kurven-Parameter: Reset und Abtastzahl.

use crate::app::{AppState, DragState};
use crate::shared::{SAMPLE_COUNT_MAX, SAMPLE_COUNT_MIN};
use anyhow::ensure;

/// Stellt die Start-Kontrollpunkte wieder her und beendet einen laufenden Drag.
pub fn reset_control_points(state: &mut AppState) {
    state.control_points = state.options.initial_points();
    state.drag = DragState::Idle;
    log::debug!("Kontrollpunkte zurückgesetzt");
    state.request_redraw();
}

/// Setzt die Abtastzahl der Kurve.
pub fn set_sample_count(state: &mut AppState, count: usize) -> anyhow::Result<()> {
    ensure!(
        (SAMPLE_COUNT_MIN..=SAMPLE_COUNT_MAX).contains(&count),
        "Abtastzahl {} außerhalb [{}, {}]",
        count,
        SAMPLE_COUNT_MIN,
        SAMPLE_COUNT_MAX
    );
    state.sample_count = count;
    state.request_redraw();
    Ok(())
}
