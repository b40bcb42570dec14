//! Geometrie-Berechnungen für die kubische Bézier-Kurve.

use super::ControlPoints;
use glam::DVec2;

/// Abgetastete Polylinie einer Bézier-Kurve.
///
/// Wird bei jeder Änderung komplett neu berechnet, nie inkrementell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledCurve(Vec<DVec2>);

impl SampledCurve {
    /// Alle Kurvenpunkte in Parameter-Reihenfolge.
    pub fn points(&self) -> &[DVec2] {
        &self.0
    }

    /// Anzahl der Kurvenpunkte.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Erster Kurvenpunkt (entspricht P0).
    pub fn first(&self) -> Option<DVec2> {
        self.0.first().copied()
    }

    /// Letzter Kurvenpunkt (entspricht P3).
    pub fn last(&self) -> Option<DVec2> {
        self.0.last().copied()
    }

    /// Iteriert über die Kurvenpunkte.
    pub fn iter(&self) -> impl Iterator<Item = &DVec2> {
        self.0.iter()
    }
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Tastet die Kurve an `sample_count` gleichverteilten Parametern in [0, 1] ab.
///
/// t = 0 und t = 1 sind immer enthalten, sodass erster und letzter Punkt P0 und P3 sind.
/// `sample_count == 0` liefert eine leere Kurve, `sample_count == 1` nur P0.
pub fn sample_cubic(points: &ControlPoints, sample_count: usize) -> SampledCurve {
    let [p0, p1, p2, p3] = *points.as_array();
    match sample_count {
        0 => SampledCurve::default(),
        1 => SampledCurve(vec![p0]),
        n => {
            let last = (n - 1) as f64;
            let samples = (0..n)
                .map(|i| cubic_bezier(p0, p1, p2, p3, i as f64 / last))
                .collect();
            SampledCurve(samples)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arch() -> ControlPoints {
        ControlPoints::from_arrays([[0.0, 0.0], [1.0, 2.0], [3.0, 3.0], [4.0, 0.0]])
    }

    #[test]
    fn test_cubic_bezier_midpoint_regression() {
        let [p0, p1, p2, p3] = *arch().as_array();

        let mid = cubic_bezier(p0, p1, p2, p3, 0.5);

        // B(0.5) = 0.125·P0 + 0.375·P1 + 0.375·P2 + 0.125·P3
        assert_relative_eq!(mid.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(mid.y, 1.875, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_count_and_endpoints() {
        let points = ControlPoints::from_arrays([[-0.5, 3.0], [2.0, -1.0], [7.0, 2.5], [1.0, 1.0]]);

        for n in [2, 3, 10, 100, 257] {
            let curve = sample_cubic(&points, n);
            assert_eq!(curve.len(), n);

            let first = curve.first().expect("Startpunkt erwartet");
            let last = curve.last().expect("Endpunkt erwartet");
            assert!((first - points.first()).length() < 1e-12);
            assert!((last - points.last()).length() < 1e-12);
        }
    }

    #[test]
    fn test_odd_sample_count_hits_midpoint() {
        let curve = sample_cubic(&arch(), 3);

        assert_relative_eq!(curve.points()[1].x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(curve.points()[1].y, 1.875, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_sample_counts() {
        assert!(sample_cubic(&arch(), 0).is_empty());

        let single = sample_cubic(&arch(), 1);
        assert_eq!(single.points(), &[DVec2::ZERO]);
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let points = arch();

        let a = sample_cubic(&points, 100);
        let b = sample_cubic(&points, 100);

        assert_eq!(a, b);
    }

    #[test]
    fn test_collinear_points_stay_on_line() {
        let points = ControlPoints::from_arrays([[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]);

        for p in sample_cubic(&points, 50).iter() {
            assert_relative_eq!(p.x, p.y, epsilon = 1e-12);
        }
    }
}
