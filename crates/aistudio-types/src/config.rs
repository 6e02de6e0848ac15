//! Thinking-budget settings as they appear in the config file.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use validator::Validate;

use crate::error::{ConfigError, Result};
use crate::thinking::{ProcessDefaults, DEFAULT_THINKING_BUDGET};

/// Operator-facing settings that seed [`ProcessDefaults`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ThinkingSettings {
    /// Request a bounded thinking budget when the client sends no usable hint
    #[serde(default)]
    pub enable_thinking_budget: bool,
    /// Token budget applied in that case
    #[validate(range(min = 1_u64))]
    #[serde(default = "default_thinking_budget")]
    pub default_thinking_budget: u64,
}

fn default_thinking_budget() -> u64 {
    DEFAULT_THINKING_BUDGET.get()
}

impl Default for ThinkingSettings {
    fn default() -> Self {
        Self { enable_thinking_budget: false, default_thinking_budget: default_thinking_budget() }
    }
}

impl ThinkingSettings {
    /// Validates and freezes the settings into a defaults snapshot.
    pub fn into_defaults(self) -> Result<ProcessDefaults> {
        self.validate().map_err(|errors| {
            let field = errors
                .field_errors()
                .keys()
                .next()
                .map(|k| k.to_string())
                .unwrap_or_else(|| "thinking".to_string());
            ConfigError::validation(field, errors.to_string())
        })?;

        let budget = NonZeroU64::new(self.default_thinking_budget).ok_or_else(|| {
            ConfigError::validation("default_thinking_budget", "must be a positive integer")
        })?;

        Ok(ProcessDefaults::new(self.enable_thinking_budget, budget))
    }
}
