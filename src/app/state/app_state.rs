use crate::app::CommandLog;
use crate::core::{sample_cubic, ControlPoints, SampledCurve};
use crate::shared::DemoOptions;

use super::DragState;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Kontrollpunkte P0..P3
    pub control_points: ControlPoints,
    /// Drag-Zustand (Idle oder Dragging(i))
    pub drag: DragState,
    /// Aktuelle Abtastzahl der Kurve
    pub sample_count: usize,
    /// Start-Optionen (Toleranz, Grenzen, Farben)
    pub options: DemoOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host, dass die Darstellung neu gezeichnet werden muss
    pub redraw_requested: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(DemoOptions::default())
    }

    /// Erstellt einen App-State aus geladenen Optionen.
    pub fn with_options(options: DemoOptions) -> Self {
        Self {
            control_points: options.initial_points(),
            drag: DragState::Idle,
            sample_count: options.sample_count,
            options,
            command_log: CommandLog::new(),
            redraw_requested: true,
            should_exit: false,
        }
    }

    /// Berechnet die Kurve aus den aktuellen Kontrollpunkten neu.
    pub fn sampled_curve(&self) -> SampledCurve {
        sample_cubic(&self.control_points, self.sample_count)
    }

    /// Markiert die Darstellung als veraltet.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Liest und quittiert die Redraw-Anforderung.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
