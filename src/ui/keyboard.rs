//! Keyboard-Shortcuts.
//!
//! `R` setzt die Kontrollpunkte zurück, `Ctrl+Q` beendet die Anwendung.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub fn collect_keyboard_intents(ctx: &egui::Context) -> Vec<AppIntent> {
    // Eingabefelder (z.B. Samples-DragValue) behalten ihre Tasten
    if ctx.wants_keyboard_input() {
        return vec![];
    }

    let (modifiers, key_r_pressed, key_q_pressed) = ctx.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::Q),
        )
    });

    let mut events = Vec::new();

    if key_r_pressed && modifiers.is_none() {
        events.push(AppIntent::ResetControlPointsRequested);
    }

    if modifiers.command && key_q_pressed {
        events.push(AppIntent::ExitRequested);
    }

    events
}
