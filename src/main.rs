//! Graph Sketch Editor.
//!
//! Interaktiver egui-Editor zum Skizzieren kleiner gerichteter Graphen:
//! Nodes anlegen, per Klick-Paar Kanten ziehen, alles zurücksetzen.

use eframe::egui;
use graph_sketch_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Graph Sketch Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 768.0])
                .with_title("Graph Sketch Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Graph Sketch Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        // Beim ersten Start die Optionen-Datei anlegen
        if !config_path.exists() {
            if let Err(e) = editor_options.save_to_file(&config_path) {
                log::warn!("Optionen-Datei konnte nicht angelegt werden: {:#}", e);
            }
        }

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |panel| {
                let (rect, response) = panel
                    .allocate_exact_size(panel.available_size(), egui::Sense::click_and_drag());

                events.extend(
                    self.input
                        .collect_viewport_events(panel, &response, rect, &self.state),
                );

                ui::draw_graph(panel.painter(), rect, &self.state);

                if self.state.graph.is_empty() {
                    panel.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Leerer Graph — \"Add node\" legt den ersten Knoten an",
                        egui::FontId::proportional(18.0),
                        egui::Color32::GRAY,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);
    }
}
