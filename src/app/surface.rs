//! Zeiger-Abonnements: Schnittstelle zwischen Anzeige-Oberfläche und Controller.
//!
//! Die Oberfläche liefert Press/Release/Move synchron auf dem UI-Thread.
//! `PointerDispatcher` ist die In-Process-Implementierung, die sowohl vom
//! eframe-Host als auch von Tests mit synthetischen Events benutzt wird.

use super::{AppIntent, AppState};
use glam::DVec2;

/// Art eines Zeiger-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Primäre Taste gedrückt
    Press,
    /// Primäre Taste losgelassen
    Release,
    /// Zeiger bewegt
    Move,
}

impl PointerEventKind {
    /// Alle Event-Arten in Abonnement-Reihenfolge.
    pub const ALL: [PointerEventKind; 3] = [Self::Press, Self::Release, Self::Move];
}

/// Ein Zeiger-Event in Datenkoordinaten (`None` = außerhalb des Datenbereichs).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub pos: Option<DVec2>,
}

impl PointerEvent {
    /// Press-Event.
    pub fn press(pos: Option<DVec2>) -> Self {
        Self {
            kind: PointerEventKind::Press,
            pos,
        }
    }

    /// Release-Event.
    pub fn release(pos: Option<DVec2>) -> Self {
        Self {
            kind: PointerEventKind::Release,
            pos,
        }
    }

    /// Move-Event.
    pub fn motion(pos: Option<DVec2>) -> Self {
        Self {
            kind: PointerEventKind::Move,
            pos,
        }
    }

    /// Übersetzt das Event in den zugehörigen AppIntent.
    pub fn into_intent(self) -> AppIntent {
        match self.kind {
            PointerEventKind::Press => AppIntent::PointerPressed { pos: self.pos },
            PointerEventKind::Release => AppIntent::PointerReleased { pos: self.pos },
            PointerEventKind::Move => AppIntent::PointerMoved { pos: self.pos },
        }
    }
}

/// Handler für ein abonniertes Zeiger-Event.
pub type PointerHandler = Box<dyn FnMut(&mut AppState, Option<DVec2>) -> anyhow::Result<()>>;

/// Fähigkeit einer Anzeige-Oberfläche, Zeiger-Events an Handler zu liefern.
pub trait PointerSurface {
    /// Registriert `handler` für Events der Art `kind`.
    fn subscribe(&mut self, kind: PointerEventKind, handler: PointerHandler);
}

/// Verteilt Zeiger-Events synchron an die abonnierten Handler.
#[derive(Default)]
pub struct PointerDispatcher {
    press: Vec<PointerHandler>,
    release: Vec<PointerHandler>,
    motion: Vec<PointerHandler>,
}

impl PointerDispatcher {
    /// Erstellt einen Dispatcher ohne Abonnenten.
    pub fn new() -> Self {
        Self::default()
    }

    fn handlers(&self, kind: PointerEventKind) -> &[PointerHandler] {
        match kind {
            PointerEventKind::Press => &self.press,
            PointerEventKind::Release => &self.release,
            PointerEventKind::Move => &self.motion,
        }
    }

    fn handlers_mut(&mut self, kind: PointerEventKind) -> &mut Vec<PointerHandler> {
        match kind {
            PointerEventKind::Press => &mut self.press,
            PointerEventKind::Release => &mut self.release,
            PointerEventKind::Move => &mut self.motion,
        }
    }

    /// Anzahl der Abonnenten für `kind`.
    pub fn subscriber_count(&self, kind: PointerEventKind) -> usize {
        self.handlers(kind).len()
    }

    /// Ruft alle Handler für `event.kind` in Abonnement-Reihenfolge auf.
    /// Bricht beim ersten Fehler ab und gibt ihn zurück.
    pub fn dispatch(&mut self, state: &mut AppState, event: PointerEvent) -> anyhow::Result<()> {
        for handler in self.handlers_mut(event.kind).iter_mut() {
            handler(state, event.pos)?;
        }
        Ok(())
    }
}

impl PointerSurface for PointerDispatcher {
    fn subscribe(&mut self, kind: PointerEventKind, handler: PointerHandler) {
        self.handlers_mut(kind).push(handler);
    }
}
