//! Core-Domänentypen: Kontrollpunkte, abgetastete Kurve, Bernstein-Auswertung.

/// Kurven-Auswertung (Bernstein-Basis)
///
/// Reine Funktionen ohne Seiteneffekte, beliebig oft und parallel aufrufbar.
pub mod bezier;
pub mod control_points;

pub use bezier::{cubic_bezier, sample_cubic, SampledCurve};
pub use control_points::{ControlPoints, CONTROL_POINT_COUNT};
