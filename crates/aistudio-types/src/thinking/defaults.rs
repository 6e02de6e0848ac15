//! Process-wide fallback behavior for requests without a usable hint.

use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;

use super::directive::ThinkingMode;

/// Budget used when thinking is on by default and no explicit value is configured.
pub const DEFAULT_THINKING_BUDGET: NonZeroU64 = nonzero(8192);

pub(crate) const fn nonzero(value: u64) -> NonZeroU64 {
    match NonZeroU64::new(value) {
        Some(v) => v,
        None => panic!("budget constant must be non-zero"),
    }
}

/// Immutable snapshot of the configured defaults.
///
/// Built once at startup and passed by reference into every normalization.
/// `default_budget` only matters when `default_thinking_enabled` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDefaults {
    pub default_thinking_enabled: bool,
    pub default_budget: NonZeroU64,
}

impl ProcessDefaults {
    pub const fn new(default_thinking_enabled: bool, default_budget: NonZeroU64) -> Self {
        Self { default_thinking_enabled, default_budget }
    }

    /// The mode a request falls back to when it carries no usable hint.
    pub fn mode(&self) -> ThinkingMode {
        if self.default_thinking_enabled {
            ThinkingMode::Bounded(self.default_budget)
        } else {
            ThinkingMode::Disabled
        }
    }
}

impl Default for ProcessDefaults {
    fn default() -> Self {
        Self::new(false, DEFAULT_THINKING_BUDGET)
    }
}
