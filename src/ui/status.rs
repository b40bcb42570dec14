//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState, DragState};
use crate::shared::{SAMPLE_COUNT_MAX, SAMPLE_COUNT_MIN};

/// Rendert die Status-Bar (Punkt-Koordinaten, Drag-Zustand, Abtastzahl, Reset).
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for (index, point) in state.control_points.iter().enumerate() {
                ui.label(format!("P{}: ({:.2}, {:.2})", index, point.x, point.y));
                ui.separator();
            }

            if let DragState::Dragging(index) = state.drag {
                ui.label(format!("Dragging P{}", index));
            } else {
                ui.label("Idle");
            }

            ui.separator();

            ui.label("Samples:");
            let mut count = state.sample_count;
            if ui
                .add(egui::DragValue::new(&mut count).range(SAMPLE_COUNT_MIN..=SAMPLE_COUNT_MAX))
                .changed()
            {
                events.push(AppIntent::SampleCountChanged { count });
            }

            if ui.button("Reset (R)").clicked() {
                events.push(AppIntent::ResetControlPointsRequested);
            }
        });
    });

    events
}
