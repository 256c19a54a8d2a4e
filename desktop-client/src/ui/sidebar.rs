use std::time::Instant;

use ai_snake_common::games::snake::{Difficulty, GameStatus};
use ai_snake_common::leaderboard::LeaderboardError;
use eframe::egui;

use crate::colors;
use crate::config::{FoodSkin, SnakeSkin, Theme};
use super::{Notice, SnakeApp};

impl SnakeApp {
    pub(super) fn render_sidebar(&mut self, ui: &mut egui::Ui, now: Instant) {
        self.render_settings(ui);
        ui.separator();
        self.render_game_controls(ui, now);
        ui.separator();
        self.render_skins(ui);
        ui.separator();
        render_help(ui);
        ui.separator();
        self.render_score_chart(ui);
        ui.separator();
        self.render_admin(ui);
        self.render_notice(ui);
    }

    fn render_settings(&mut self, ui: &mut egui::Ui) {
        let mut difficulty = self.runner.difficulty();
        egui::ComboBox::from_label("🎯 Level")
            .selected_text(difficulty.label())
            .show_ui(ui, |ui| {
                for option in Difficulty::ALL {
                    ui.selectable_value(&mut difficulty, option, option.label());
                }
            });
        if difficulty != self.runner.difficulty() {
            self.runner.set_difficulty(difficulty);
            self.config.game.difficulty = difficulty;
            self.persist_config();
        }

        let mut theme = self.config.appearance.theme;
        ui.horizontal(|ui| {
            ui.label("🌗 Theme");
            ui.radio_value(&mut theme, Theme::Dark, "Dark");
            ui.radio_value(&mut theme, Theme::Light, "Light");
        });
        if theme != self.config.appearance.theme {
            self.config.appearance.theme = theme;
            self.persist_config();
        }
    }

    fn render_game_controls(&mut self, ui: &mut egui::Ui, now: Instant) {
        match self.runner.state().status() {
            GameStatus::NotStarted => {
                if ui.button("▶ Start Game").clicked() {
                    self.runner.start(now);
                    self.notice = None;
                }
            }
            GameStatus::Running => {
                if ui.button("⏸ Pause Game").clicked() {
                    self.runner.pause();
                }
                self.render_end_button(ui);
            }
            GameStatus::Paused => {
                if ui.button("🔄 Resume Game").clicked() {
                    self.runner.resume(now);
                }
                self.render_end_button(ui);
            }
            GameStatus::Over => {
                self.render_save_score(ui);
                if ui.button("🔁 Restart Game").clicked() {
                    self.restart_game();
                }
            }
        }
    }

    fn render_end_button(&mut self, ui: &mut egui::Ui) {
        if ui.button("🛑 End Game").clicked() && self.runner.end() {
            self.score_saved = false;
            self.notice = Some(Notice::Warning("Game ended manually.".to_string()));
        }
    }

    fn render_save_score(&mut self, ui: &mut egui::Ui) {
        ui.label("👤 Your Name to Save Score:");
        ui.add(
            egui::TextEdit::singleline(&mut self.name_input)
                .hint_text("Name")
                .desired_width(200.0),
        );

        let can_save = !self.score_saved;
        if ui.add_enabled(can_save, egui::Button::new("💾 Save Score")).clicked() {
            self.save_score();
        }
    }

    fn save_score(&mut self) {
        let score = self.runner.state().score();
        self.notice = Some(match self.score_board.save_score(&self.name_input, score) {
            Ok(record) => {
                self.score_saved = true;
                Notice::Success(format!("✅ Score {} saved for {}!", record.score, record.name))
            }
            Err(LeaderboardError::Validation(message)) => {
                Notice::Warning(format!("Please enter your name ({}).", message))
            }
            Err(e) => Notice::Error(format!("Score not saved, try again later: {}", e)),
        });
    }

    fn render_skins(&mut self, ui: &mut egui::Ui) {
        let mut appearance = self.config.appearance;

        egui::ComboBox::from_label("🐍 Snake")
            .selected_text(appearance.snake_skin.label())
            .show_ui(ui, |ui| {
                for skin in SnakeSkin::ALL {
                    ui.selectable_value(&mut appearance.snake_skin, skin, skin.label());
                }
            });

        egui::ComboBox::from_label("🍏 Food")
            .selected_text(appearance.food_skin.label())
            .show_ui(ui, |ui| {
                for skin in FoodSkin::ALL {
                    ui.selectable_value(&mut appearance.food_skin, skin, skin.label());
                }
            });

        if appearance != self.config.appearance {
            self.config.appearance = appearance;
            self.persist_config();
        }
    }

    fn render_score_chart(&self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("📊 Score Chart").strong());

        let chart = self.score_board.chart();
        if chart.is_empty() {
            ui.label("No scores yet!");
            return;
        }

        let max_score = chart.iter().map(|r| r.score).max().unwrap_or(0).max(1);
        let bar_space = (ui.available_width() - 120.0).max(30.0);
        let bar_color = colors::snake_color(self.config.appearance.snake_skin);

        for record in chart {
            ui.horizontal(|ui| {
                ui.add_sized(
                    [70.0, 16.0],
                    egui::Label::new(egui::RichText::new(&record.name).small()).truncate(),
                );
                let width = (bar_space * record.score as f32 / max_score as f32).max(2.0);
                let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 12.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 2.0, bar_color);
                ui.label(record.score.to_string());
            });
        }
    }

    fn render_admin(&mut self, ui: &mut egui::Ui) {
        ui.collapsing("🔐 Admin", |ui| {
            if self.admin_capability.is_none() {
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.admin_input)
                        .password(true)
                        .hint_text("Admin password"),
                );
                let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Unlock").clicked() || submitted {
                    self.admin_capability = self.admin_gate.unlock(&self.admin_input);
                    self.admin_input.clear();
                    self.notice = Some(match self.admin_capability {
                        Some(_) => Notice::Success("✅ Access Granted".to_string()),
                        None => Notice::Error("❌ Incorrect Password".to_string()),
                    });
                }
                return;
            }

            ui.label(egui::RichText::new("⚙ Admin Tools").strong());

            if ui.button("🔁 Restart Fresh Game").clicked() {
                self.restart_fresh();
            }

            if ui.button("🗑 Clear All Leaderboard Scores").clicked()
                && let Some(capability) = self.admin_capability.as_ref()
            {
                self.notice = Some(match self.score_board.clear_all(capability) {
                    Ok(count) => Notice::Success(format!("✅ Leaderboard cleared ({} scores removed)", count)),
                    Err(e) => Notice::Error(format!("Could not clear leaderboard: {}", e)),
                });
            }

            if ui.button("🔒 Lock").clicked() {
                self.admin_capability = None;
            }
        });
    }

    fn render_notice(&self, ui: &mut egui::Ui) {
        let Some(notice) = &self.notice else {
            return;
        };

        ui.separator();
        let (text, color) = match notice {
            Notice::Success(text) => (text, egui::Color32::GREEN),
            Notice::Warning(text) => (text, egui::Color32::YELLOW),
            Notice::Error(text) => (text, egui::Color32::RED),
        };
        ui.label(egui::RichText::new(text).color(color));
    }
}

fn render_help(ui: &mut egui::Ui) {
    ui.collapsing("📘 Instructions", |ui| {
        ui.label("• 🤖 The snake moves automatically towards the food.");
        ui.label("• 🍎 Each meal adds one segment and one point.");
        ui.label("• 💥 The game ends when the snake hits a wall or itself.");
        ui.label("• 💾 Enter your name after game over to save your score.");
        ui.label("• 🔁 Restart at any time after a game ends.");
    });

    ui.collapsing("ℹ About This Game", |ui| {
        ui.label("A greedy snake: every step it closes the horizontal gap to the food first, then the vertical one. No path finding, so it happily bites itself.");
        ui.label("🏆 Scores are kept in a local SQLite file.");
    });
}
