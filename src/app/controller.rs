//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState, PointerEvent, PointerEventKind, PointerSurface};
use crate::shared::RenderScene;
use glam::DVec2;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Debug, Default, Clone, Copy)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Abonniert Press/Release/Move auf einer Zeiger-Oberfläche.
    ///
    /// Jeder Handler übersetzt das Event in einen Intent und führt ihn aus.
    pub fn attach(&self, surface: &mut impl PointerSurface) {
        for kind in PointerEventKind::ALL {
            let mut controller = *self;
            surface.subscribe(
                kind,
                Box::new(move |state: &mut AppState, pos: Option<DVec2>| {
                    controller.handle_intent(state, PointerEvent { kind, pos }.into_intent())
                }),
            );
        }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Drag ===
            AppCommand::BeginDrag { index } => handlers::drag::begin(state, index)?,
            AppCommand::UpdateDraggedPoint { pos } => handlers::drag::update(state, pos)?,
            AppCommand::EndDrag => handlers::drag::end(state),

            // === Kurve ===
            AppCommand::ResetControlPoints => handlers::curve::reset_control_points(state),
            AppCommand::SetSampleCount { count } => {
                handlers::curve::set_sample_count(state, count)?
            }

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
