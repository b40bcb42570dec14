//! Zentrale Konfiguration für die Bézier-Demo.
//!
//! `DemoOptions` enthält alle beim Start einlesbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use super::DataBounds;
use crate::core::{ControlPoints, CONTROL_POINT_COUNT};
use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Anzahl der Abtastpunkte pro Kurve.
pub const SAMPLE_COUNT: usize = 100;
/// Kleinste sinnvolle Abtastzahl (Start + Ende).
pub const SAMPLE_COUNT_MIN: usize = 2;
/// Obergrenze der Abtastzahl (UI-Regler und Konfiguration).
pub const SAMPLE_COUNT_MAX: usize = 10_000;

// ── Interaktion ─────────────────────────────────────────────────────

/// Halbe Kantenlänge der achsenparallelen Pick-Box in Datenkoordinaten.
pub const PICK_TOLERANCE: f64 = 0.2;
/// Standard-Kontrollpunkte P0..P3.
pub const DEFAULT_POINTS: [[f64; 2]; CONTROL_POINT_COUNT] =
    [[0.0, 0.0], [1.0, 2.0], [3.0, 3.0], [4.0, 0.0]];

// ── Plot ────────────────────────────────────────────────────────────

/// Feste x-Achsengrenzen.
pub const X_BOUNDS: [f64; 2] = [-1.0, 5.0];
/// Feste y-Achsengrenzen.
pub const Y_BOUNDS: [f64; 2] = [-1.0, 4.0];
/// Plot-Titel.
pub const PLOT_TITLE: &str = "Cubic Bézier Curve – Interactive Demo";
/// Farbe der Kurve (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Linienstärke der Kurve in Pixeln.
pub const CURVE_WIDTH: f32 = 2.0;
/// Farbe des gestrichelten Kontrollpolygons (RGBA: Rot).
pub const POLYGON_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe der Kontrollpunkt-Marker (RGBA: Rot).
pub const MARKER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe des gerade gezogenen Markers (RGBA: Magenta).
pub const MARKER_COLOR_DRAGGED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Marker-Radius in Pixeln.
pub const MARKER_RADIUS: f32 = 5.0;

/// Alle beim Start einlesbaren Demo-Optionen.
/// Wird als `bezier_drag_demo.toml` neben der Binary gesucht.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Anzahl der Abtastpunkte
    pub sample_count: usize,
    /// Kontrollpunkte beim Start und nach Reset
    pub default_points: [[f64; 2]; CONTROL_POINT_COUNT],

    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Toleranz (je Achse) in Datenkoordinaten
    pub pick_tolerance: f64,

    // ── Plot ────────────────────────────────────────────────────
    /// Plot-Titel
    pub title: String,
    /// Achsengrenzen x
    pub x_bounds: [f64; 2],
    /// Achsengrenzen y
    pub y_bounds: [f64; 2],
    /// Kurvenfarbe
    pub curve_color: [f32; 4],
    /// Kurven-Linienstärke
    pub curve_width: f32,
    /// Farbe des Kontrollpolygons
    pub polygon_color: [f32; 4],
    /// Marker-Farbe
    pub marker_color: [f32; 4],
    /// Marker-Farbe des gezogenen Punkts
    pub marker_color_dragged: [f32; 4],
    /// Marker-Radius
    pub marker_radius: f32,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            sample_count: SAMPLE_COUNT,
            default_points: DEFAULT_POINTS,

            pick_tolerance: PICK_TOLERANCE,

            title: PLOT_TITLE.to_string(),
            x_bounds: X_BOUNDS,
            y_bounds: Y_BOUNDS,
            curve_color: CURVE_COLOR,
            curve_width: CURVE_WIDTH,
            polygon_color: POLYGON_COLOR,
            marker_color: MARKER_COLOR,
            marker_color_dragged: MARKER_COLOR_DRAGGED,
            marker_radius: MARKER_RADIUS,
        }
    }
}

impl DemoOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei (Vorlage zum Anpassen).
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_drag_demo"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_drag_demo.toml")
    }

    /// Ersetzt ungültige Werte durch Standardwerte und protokolliert jede Korrektur.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        let clamped = self.sample_count.clamp(SAMPLE_COUNT_MIN, SAMPLE_COUNT_MAX);
        if clamped != self.sample_count {
            log::warn!(
                "sample_count {} außerhalb [{}, {}], verwende {}",
                self.sample_count,
                SAMPLE_COUNT_MIN,
                SAMPLE_COUNT_MAX,
                clamped
            );
            self.sample_count = clamped;
        }

        if !(self.pick_tolerance.is_finite() && self.pick_tolerance > 0.0) {
            log::warn!(
                "pick_tolerance {} ungültig, verwende {}",
                self.pick_tolerance,
                defaults.pick_tolerance
            );
            self.pick_tolerance = defaults.pick_tolerance;
        }

        if !self.bounds().is_valid() {
            log::warn!(
                "Achsengrenzen x={:?} y={:?} ungültig, verwende Standardgrenzen",
                self.x_bounds,
                self.y_bounds
            );
            self.x_bounds = defaults.x_bounds;
            self.y_bounds = defaults.y_bounds;
        }

        if self.default_points.iter().flatten().any(|v| !v.is_finite()) {
            log::warn!("default_points enthalten ungültige Werte, verwende Standardpunkte");
            self.default_points = defaults.default_points;
        }

        self
    }

    /// Feste Plot-Grenzen in Datenkoordinaten.
    pub fn bounds(&self) -> DataBounds {
        DataBounds::new(self.x_bounds, self.y_bounds)
    }

    /// Kontrollpunkte für Start und Reset.
    pub fn initial_points(&self) -> ControlPoints {
        ControlPoints::from_arrays(self.default_points)
    }
}
