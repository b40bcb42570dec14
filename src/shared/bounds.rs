//! Feste Achsengrenzen des Plots in Datenkoordinaten.

use glam::DVec2;

/// Achsenparalleles Rechteck in Datenkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    /// `[min, max]` der x-Achse
    pub x: [f64; 2],
    /// `[min, max]` der y-Achse
    pub y: [f64; 2],
}

impl DataBounds {
    /// Erstellt Grenzen aus `[min, max]`-Paaren.
    pub fn new(x: [f64; 2], y: [f64; 2]) -> Self {
        Self { x, y }
    }

    /// Untere linke Ecke.
    pub fn min(&self) -> [f64; 2] {
        [self.x[0], self.y[0]]
    }

    /// Obere rechte Ecke.
    pub fn max(&self) -> [f64; 2] {
        [self.x[1], self.y[1]]
    }

    /// Endliche Werte und min < max auf beiden Achsen.
    pub fn is_valid(&self) -> bool {
        self.x.iter().chain(self.y.iter()).all(|v| v.is_finite())
            && self.x[0] < self.x[1]
            && self.y[0] < self.y[1]
    }

    /// Prüft, ob `pos` innerhalb der Grenzen liegt (Ränder inklusive).
    pub fn contains(&self, pos: DVec2) -> bool {
        (self.x[0]..=self.x[1]).contains(&pos.x) && (self.y[0]..=self.y[1]).contains(&pos.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_and_validity() {
        let bounds = DataBounds::new([-1.0, 5.0], [-1.0, 4.0]);

        assert!(bounds.is_valid());
        assert!(bounds.contains(DVec2::new(5.0, -1.0)));
        assert!(!bounds.contains(DVec2::new(5.1, 0.0)));
        assert!(!DataBounds::new([1.0, 1.0], [0.0, 1.0]).is_valid());
        assert!(!DataBounds::new([0.0, f64::INFINITY], [0.0, 1.0]).is_valid());
    }
}
