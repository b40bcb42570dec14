/// Drag-Zustand des Interaktions-Controllers.
///
/// Übergänge entstehen ausschließlich durch Zeiger-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein Punkt gegriffen
    #[default]
    Idle,
    /// Kontrollpunkt mit diesem Index wird gezogen
    Dragging(usize),
}

impl DragState {
    /// Index des gezogenen Punkts, falls ein Drag aktiv ist.
    pub fn dragged_index(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging(index) => Some(*index),
        }
    }

    /// Gibt `true` zurück, wenn ein Drag aktiv ist.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}
