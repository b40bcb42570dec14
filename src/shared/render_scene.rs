//! Render-Szene als expliziter Übergabevertrag zwischen App und UI.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::{DataBounds, DemoOptions};
use crate::core::{ControlPoints, SampledCurve};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Feste Plot-Grenzen
    pub bounds: DataBounds,
    /// Abgetastete Kurve (pro Frame neu berechnet)
    pub curve: SampledCurve,
    /// Kontrollpunkte: Eckpunkte des Kontrollpolygons und Marker-Positionen
    pub control_points: ControlPoints,
    /// Index des gerade gezogenen Punkts (für Hervorhebung)
    pub dragged_index: Option<usize>,
    /// Laufzeit-Optionen für Titel, Farben, Größen
    pub options: DemoOptions,
}

impl RenderScene {
    /// Gibt zurück, ob gerade ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.dragged_index.is_some()
    }
}
