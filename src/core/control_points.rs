//! Die vier Kontrollpunkte P0..P3 einer kubischen Bézier-Kurve.

use glam::DVec2;

/// Anzahl der Kontrollpunkte einer kubischen Bézier-Kurve.
pub const CONTROL_POINT_COUNT: usize = 4;

/// Geordnete, feste Folge von vier Kontrollpunkten in Datenkoordinaten.
///
/// Die Länge ist über den Array-Typ fixiert, die Reihenfolge definiert P0..P3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoints([DVec2; CONTROL_POINT_COUNT]);

impl ControlPoints {
    /// Erstellt Kontrollpunkte aus vier Positionen.
    pub fn new(points: [DVec2; CONTROL_POINT_COUNT]) -> Self {
        Self(points)
    }

    /// Erstellt Kontrollpunkte aus `[x, y]`-Paaren (z.B. aus der TOML-Konfiguration).
    pub fn from_arrays(points: [[f64; 2]; CONTROL_POINT_COUNT]) -> Self {
        Self(points.map(DVec2::from_array))
    }

    /// Gibt die Punkte als `[x, y]`-Paare zurück.
    pub fn to_arrays(&self) -> [[f64; 2]; CONTROL_POINT_COUNT] {
        self.0.map(|p| p.to_array())
    }

    /// Read-only Sicht auf P0..P3.
    pub fn as_array(&self) -> &[DVec2; CONTROL_POINT_COUNT] {
        &self.0
    }

    /// Gibt den Punkt mit Index `index` zurück (None außerhalb 0..4).
    pub fn get(&self, index: usize) -> Option<DVec2> {
        self.0.get(index).copied()
    }

    /// Mutable Referenz auf einen Punkt (None außerhalb 0..4).
    pub fn get_mut(&mut self, index: usize) -> Option<&mut DVec2> {
        self.0.get_mut(index)
    }

    /// Iteriert über P0..P3 in Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &DVec2> {
        self.0.iter()
    }

    /// Erster Punkt (Kurvenstart).
    pub fn first(&self) -> DVec2 {
        self.0[0]
    }

    /// Letzter Punkt (Kurvenende).
    pub fn last(&self) -> DVec2 {
        self.0[CONTROL_POINT_COUNT - 1]
    }

    /// Sucht den Kontrollpunkt, der `pos` innerhalb der Toleranz-Box liegt.
    ///
    /// Die Box ist achsenparallel: beide Achsabstände müssen echt kleiner als
    /// `tolerance` sein. Liegen mehrere Punkte in der Box, gewinnt der höchste Index.
    pub fn pick(&self, pos: DVec2, tolerance: f64) -> Option<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, p)| (p.x - pos.x).abs() < tolerance && (p.y - pos.y).abs() < tolerance)
            .map(|(index, _)| index)
            .last()
    }
}

impl Default for ControlPoints {
    fn default() -> Self {
        Self::from_arrays([[0.0, 0.0], [1.0, 2.0], [3.0, 3.0], [4.0, 0.0]])
    }
}
