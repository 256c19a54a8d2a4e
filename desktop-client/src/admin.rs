use ai_snake_common::log;

/// Proof that the admin secret was entered. Only [`AdminGate::unlock`]
/// creates one, and destructive actions take it by reference.
#[derive(Debug)]
pub struct AdminCapability {
    _private: (),
}

/// Plain-text shared-secret check. This is a convenience lock for a local
/// toy, not authentication; anything deployed must swap it for a real
/// credential check.
pub struct AdminGate {
    shared_secret: String,
}

impl AdminGate {
    pub fn new(shared_secret: impl Into<String>) -> Self {
        Self {
            shared_secret: shared_secret.into(),
        }
    }

    pub fn unlock(&self, attempt: &str) -> Option<AdminCapability> {
        if attempt.is_empty() || attempt != self.shared_secret {
            log!("Admin unlock rejected");
            return None;
        }
        log!("Admin tools unlocked");
        Some(AdminCapability { _private: () })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_secret_unlocks() {
        let gate = AdminGate::new("admin123");
        assert!(gate.unlock("admin123").is_some());
    }

    #[test]
    fn test_wrong_or_empty_secret_is_rejected() {
        let gate = AdminGate::new("admin123");
        assert!(gate.unlock("admin").is_none());
        assert!(gate.unlock("").is_none());
        assert!(gate.unlock("admin123 ").is_none());
    }
}
