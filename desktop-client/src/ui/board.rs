use ai_snake_common::games::snake::{GameStatus, Point, SnakeGameState};
use eframe::egui;

use crate::colors;
use crate::config::AppearanceConfig;

const MAX_BOARD_SIZE: f32 = 520.0;
const MIN_CELL_SIZE: f32 = 8.0;

pub fn render_board(ui: &mut egui::Ui, state: &SnakeGameState, appearance: &AppearanceConfig) {
    let field = state.field_size();
    let available = ui.available_size();
    let max_board_size = available.x.min(available.y - 90.0).min(MAX_BOARD_SIZE);
    let cell_size = (max_board_size / field.width.max(field.height) as f32).max(MIN_CELL_SIZE);
    let board_size = egui::vec2(cell_size * field.width as f32, cell_size * field.height as f32);

    ui.vertical_centered(|ui| {
        let (response, painter) = ui.allocate_painter(board_size, egui::Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 4.0, colors::background_color(appearance.theme));

        let line = egui::Stroke::new(1.0, colors::grid_line_color(appearance.theme));
        for x in 1..field.width {
            let px = origin.x + x as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(px, origin.y), egui::pos2(px, origin.y + board_size.y)],
                line,
            );
        }
        for y in 1..field.height {
            let py = origin.y + y as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(origin.x, py), egui::pos2(origin.x + board_size.x, py)],
                line,
            );
        }

        let cell_rect = |point: Point| {
            egui::Rect::from_min_size(
                egui::pos2(
                    origin.x + point.x as f32 * cell_size,
                    origin.y + point.y as f32 * cell_size,
                ),
                egui::vec2(cell_size, cell_size),
            )
            .shrink(1.0)
        };

        let head = state.snake().head();
        for segment in state.snake().body() {
            if !field.contains(*segment) {
                continue;
            }
            let color = if *segment == head {
                colors::snake_head_color(appearance.snake_skin)
            } else {
                colors::snake_color(appearance.snake_skin)
            };
            let rect = cell_rect(*segment);
            if colors::is_round(appearance.snake_skin) {
                painter.circle_filled(rect.center(), rect.width() / 2.0, color);
            } else {
                painter.rect_filled(rect, 2.0, color);
            }
        }

        let food = state.food();
        if field.contains(food) {
            let rect = cell_rect(food);
            painter.circle_filled(
                rect.center(),
                rect.width() / 2.2,
                colors::food_color(appearance.food_skin),
            );
        }

        ui.add_space(10.0);
        ui.heading(format!("Score: {}", state.score()));
        render_status(ui, state);
    });
}

fn render_status(ui: &mut egui::Ui, state: &SnakeGameState) {
    match state.status() {
        GameStatus::NotStarted => {
            ui.label("Game not started. Click ▶ Start Game to begin.");
        }
        GameStatus::Paused => {
            ui.label(
                egui::RichText::new("⏸ Game paused. Click Resume to continue.")
                    .color(egui::Color32::YELLOW),
            );
        }
        GameStatus::Running => {
            ui.label("🤖 The snake is chasing the food on its own.");
        }
        GameStatus::Over => {
            let reason = state
                .end_reason()
                .map(|reason| format!(": the snake {}", reason.describe()))
                .unwrap_or_default();
            ui.label(
                egui::RichText::new(format!("💀 Game Over{}", reason))
                    .color(egui::Color32::RED)
                    .size(22.0),
            );
        }
    }
}
