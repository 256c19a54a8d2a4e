use eframe::egui;

use crate::config::{FoodSkin, SnakeSkin, Theme};

pub fn background_color(theme: Theme) -> egui::Color32 {
    match theme {
        Theme::Dark => egui::Color32::from_rgb(0x1E, 0x1E, 0x1E),
        Theme::Light => egui::Color32::from_rgb(0xF2, 0xF2, 0xF2),
    }
}

pub fn grid_line_color(theme: Theme) -> egui::Color32 {
    match theme {
        Theme::Dark => egui::Color32::from_rgb(0x2C, 0x2C, 0x2C),
        Theme::Light => egui::Color32::from_rgb(0xDD, 0xDD, 0xDD),
    }
}

pub fn snake_color(skin: SnakeSkin) -> egui::Color32 {
    match skin {
        SnakeSkin::GreenSquare | SnakeSkin::GreenCircle => egui::Color32::from_rgb(0x4C, 0xAF, 0x50),
        SnakeSkin::Potion => egui::Color32::from_rgb(0x9C, 0xCC, 0x65),
        SnakeSkin::BlueSquare => egui::Color32::from_rgb(0x21, 0x96, 0xF3),
    }
}

/// Head is drawn a shade darker so the direction of travel is readable.
pub fn snake_head_color(skin: SnakeSkin) -> egui::Color32 {
    let base = snake_color(skin);
    egui::Color32::from_rgb(
        (base.r() as f32 * 0.7) as u8,
        (base.g() as f32 * 0.7) as u8,
        (base.b() as f32 * 0.7) as u8,
    )
}

pub fn food_color(skin: FoodSkin) -> egui::Color32 {
    match skin {
        FoodSkin::Apple => egui::Color32::from_rgb(0xE5, 0x39, 0x35),
        FoodSkin::Grapes => egui::Color32::from_rgb(0x7E, 0x57, 0xC2),
        FoodSkin::Cherries => egui::Color32::from_rgb(0xC6, 0x28, 0x28),
        FoodSkin::Watermelon => egui::Color32::from_rgb(0x43, 0xA0, 0x47),
    }
}

pub fn is_round(skin: SnakeSkin) -> bool {
    matches!(skin, SnakeSkin::GreenCircle | SnakeSkin::Potion)
}
