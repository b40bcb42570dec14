//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier liegt die Zustandsmaschine des Drags: welche Zeiger-Events
//! angenommen werden und welche als No-op verworfen werden.

use super::{AppCommand, AppIntent, AppState, DragState};
use crate::shared::{SAMPLE_COUNT_MAX, SAMPLE_COUNT_MIN};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => {
            if state.drag.is_dragging() {
                // Einzelzeiger-Modell: zweiter Press während eines Drags wird verworfen
                log::debug!("Press während aktivem Drag ignoriert");
                return vec![];
            }
            let Some(pos) = pos else {
                return vec![];
            };
            state
                .control_points
                .pick(pos, state.options.pick_tolerance)
                .map(|index| vec![AppCommand::BeginDrag { index }])
                .unwrap_or_default()
        }
        AppIntent::PointerMoved { pos } => match (state.drag, pos) {
            (DragState::Dragging(_), Some(pos)) => vec![AppCommand::UpdateDraggedPoint { pos }],
            // Außerhalb des Datenbereichs bleibt der Drag aktiv, der Punkt bleibt stehen
            _ => vec![],
        },
        // Release beendet den Drag unabhängig von Position und Zustand
        AppIntent::PointerReleased { .. } => vec![AppCommand::EndDrag],
        AppIntent::ResetControlPointsRequested => vec![AppCommand::ResetControlPoints],
        AppIntent::SampleCountChanged { count } => {
            let count = count.clamp(SAMPLE_COUNT_MIN, SAMPLE_COUNT_MAX);
            if count == state.sample_count {
                vec![]
            } else {
                vec![AppCommand::SetSampleCount { count }]
            }
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
