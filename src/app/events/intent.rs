use glam::DVec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Zeiger-Positionen sind Datenkoordinaten; `None` bedeutet
/// "außerhalb des Datenbereichs".
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primäre Maustaste gedrückt
    PointerPressed { pos: Option<DVec2> },
    /// Primäre Maustaste losgelassen
    PointerReleased { pos: Option<DVec2> },
    /// Zeiger bewegt
    PointerMoved { pos: Option<DVec2> },
    /// Kontrollpunkte auf Standard zurücksetzen
    ResetControlPointsRequested,
    /// Abtastzahl der Kurve geändert
    SampleCountChanged { count: usize },
    /// Anwendung beenden
    ExitRequested,
}
