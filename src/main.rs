//! Bézier Drag Demo.
//!
//! Zeichnet eine kubische Bézier-Kurve aus vier Kontrollpunkten, die sich
//! per Maus verschieben lassen. Die Kurve wird bei jeder Änderung neu berechnet.

use bezier_drag_demo::{
    ui, AppController, AppIntent, AppState, DemoOptions, PointerDispatcher, PointerEvent,
};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren (RUST_LOG überschreibt den Standard)
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        log::info!(
            "Bézier Drag Demo v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([960.0, 720.0])
                .with_title("Bézier Drag Demo"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bézier Drag Demo",
            options,
            Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct DemoApp {
    state: AppState,
    controller: AppController,
    pointer: PointerDispatcher,
}

impl DemoApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = DemoOptions::config_path();
        let options = DemoOptions::load_from_file(&config_path);

        let controller = AppController::new();
        let mut pointer = PointerDispatcher::new();
        controller.attach(&mut pointer);

        Self {
            state: AppState::with_options(options),
            controller,
            pointer,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let (intents, pointer_events) = self.collect_ui_events(ctx);

        self.process_intents(intents);
        self.process_pointer_events(pointer_events);

        self.maybe_request_repaint(ctx);
    }
}

impl DemoApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> (Vec<AppIntent>, Vec<PointerEvent>) {
        let mut intents = Vec::new();

        intents.extend(ui::collect_keyboard_intents(ctx));
        intents.extend(ui::render_status_bar(ctx, &self.state));

        let scene = self.controller.build_render_scene(&self.state);
        let pointer_events = egui::CentralPanel::default()
            .show(ctx, |ui| ui::render_canvas(ui, &scene))
            .inner;

        (intents, pointer_events)
    }

    fn process_intents(&mut self, intents: Vec<AppIntent>) {
        for intent in intents {
            if let Err(e) = self.controller.handle_intent(&mut self.state, intent) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn process_pointer_events(&mut self, events: Vec<PointerEvent>) {
        for event in events {
            if let Err(e) = self.pointer.dispatch(&mut self.state, event) {
                log::error!("Pointer event {:?} failed: {:#}", event.kind, e);
            }
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context) {
        if self.state.take_redraw_request() || self.state.should_exit {
            ctx.request_repaint();
        }
    }
}
