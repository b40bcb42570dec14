use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Drag auf Kontrollpunkt `index` beginnen
    BeginDrag { index: usize },
    /// Gezogenen Punkt auf Datenposition setzen
    UpdateDraggedPoint { pos: DVec2 },
    /// Drag beenden (immer zurück auf Idle)
    EndDrag,
    /// Kontrollpunkte auf Standard zurücksetzen
    ResetControlPoints,
    /// Abtastzahl setzen
    SetSampleCount { count: usize },
    /// Anwendung beenden
    RequestExit,
}
