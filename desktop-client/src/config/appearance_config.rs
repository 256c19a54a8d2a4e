use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SnakeSkin {
    #[default]
    GreenSquare,
    GreenCircle,
    Potion,
    BlueSquare,
}

impl SnakeSkin {
    pub const ALL: [SnakeSkin; 4] = [
        SnakeSkin::GreenSquare,
        SnakeSkin::GreenCircle,
        SnakeSkin::Potion,
        SnakeSkin::BlueSquare,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SnakeSkin::GreenSquare => "🟩 Green square",
            SnakeSkin::GreenCircle => "🟢 Green circle",
            SnakeSkin::Potion => "🧪 Potion",
            SnakeSkin::BlueSquare => "🟦 Blue square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodSkin {
    #[default]
    Apple,
    Grapes,
    Cherries,
    Watermelon,
}

impl FoodSkin {
    pub const ALL: [FoodSkin; 4] = [
        FoodSkin::Apple,
        FoodSkin::Grapes,
        FoodSkin::Cherries,
        FoodSkin::Watermelon,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FoodSkin::Apple => "🍎 Apple",
            FoodSkin::Grapes => "🍇 Grapes",
            FoodSkin::Cherries => "🍒 Cherries",
            FoodSkin::Watermelon => "🍉 Watermelon",
        }
    }
}

/// Cosmetic choices. Only the renderer reads these.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy, Default)]
pub struct AppearanceConfig {
    pub theme: Theme,
    pub snake_skin: SnakeSkin,
    pub food_skin: FoodSkin,
}
