mod board;
mod sidebar;

use std::time::Instant;

use ai_snake_common::games::SessionRng;
use ai_snake_common::games::snake::TickOutcome;
use ai_snake_common::log;
use eframe::egui;

use crate::admin::{AdminCapability, AdminGate};
use crate::config::{ClientConfigManager, Config, Theme};
use crate::offline::{ScoreBoard, SnakeRunner};

enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

pub struct SnakeApp {
    config: Config,
    config_manager: ClientConfigManager,
    runner: SnakeRunner,
    score_board: ScoreBoard,
    admin_gate: AdminGate,
    admin_capability: Option<AdminCapability>,
    admin_input: String,
    name_input: String,
    score_saved: bool,
    notice: Option<Notice>,
}

impl SnakeApp {
    pub fn new(
        config: Config,
        config_manager: ClientConfigManager,
        score_board: ScoreBoard,
        rng: SessionRng,
    ) -> Self {
        let runner = SnakeRunner::new(&config.game, rng);
        let admin_gate = AdminGate::new(config.admin.shared_secret.clone());

        Self {
            config,
            config_manager,
            runner,
            score_board,
            admin_gate,
            admin_capability: None,
            admin_input: String::new(),
            name_input: String::new(),
            score_saved: false,
            notice: None,
        }
    }

    fn persist_config(&self) {
        if let Err(e) = self.config_manager.set_config(&self.config) {
            log!("Failed to save settings: {}", e);
        }
    }

    fn on_tick(&mut self, outcome: TickOutcome) {
        match outcome {
            TickOutcome::Collided(_) | TickOutcome::BoardFilled => {
                self.score_saved = false;
                self.notice = Some(Notice::Error("💀 Game Over!".to_string()));
            }
            TickOutcome::Idle | TickOutcome::Moved | TickOutcome::AteFood => {}
        }
    }

    fn restart_game(&mut self) {
        self.runner.restart();
        self.score_saved = false;
        self.notice = None;
    }

    /// Drops every piece of session state, as if the app was just opened.
    fn restart_fresh(&mut self) {
        self.runner.reset_session(&self.config.game);
        self.name_input.clear();
        self.score_saved = false;
        self.notice = None;
        self.score_board.refresh();
    }

    fn render_top_players(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("🏅 Top Players");
            if ui.small_button("🔄").on_hover_text("Reload leaderboard").clicked() {
                self.score_board.refresh();
            }
        });

        if let Some(message) = self.score_board.unavailable() {
            ui.label(
                egui::RichText::new(format!("Leaderboard unavailable: {}", message))
                    .color(egui::Color32::GRAY)
                    .small(),
            );
        }

        if self.score_board.top().is_empty() {
            ui.label("No scores yet!");
            return;
        }

        for (i, record) in self.score_board.top().iter().enumerate() {
            ui.label(format!("{}. {} - {}", i + 1, record.name, record.score));
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if let Some(outcome) = self.runner.advance(now) {
            self.on_tick(outcome);
        }

        ctx.set_visuals(match self.config.appearance.theme {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        });

        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(270.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("controls_scroll")
                    .show(ui, |ui| self.render_sidebar(ui, now));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("🤖 AI Snake Game");
            });
            ui.separator();
            board::render_board(ui, self.runner.state(), &self.config.appearance);
            ui.separator();
            self.render_top_players(ui);
        });

        if let Some(wait) = self.runner.time_until_next_tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
