use ai_snake_common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AdminConfig {
    /// Compared as plain text. Not real authentication.
    pub shared_secret: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            shared_secret: "admin123".to_string(),
        }
    }
}

impl Validate for AdminConfig {
    fn validate(&self) -> Result<(), String> {
        if self.shared_secret.is_empty() {
            return Err("admin shared_secret must not be empty".to_string());
        }
        Ok(())
    }
}
