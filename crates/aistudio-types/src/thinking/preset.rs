//! Named budget levels accepted in place of a token count.

use std::num::NonZeroU64;

use super::defaults::nonzero;

const LOW_BUDGET: NonZeroU64 = nonzero(1000);
const MEDIUM_BUDGET: NonZeroU64 = nonzero(8000);
const HIGH_BUDGET: NonZeroU64 = nonzero(24000);

/// Fixed effort presets and their token budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThinkingPreset {
    /// 1000 tokens.
    Low,
    /// 8000 tokens.
    Medium,
    /// 24000 tokens.
    High,
}

impl ThinkingPreset {
    /// Looks up a preset by an already trimmed, lowercased name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn budget(self) -> NonZeroU64 {
        match self {
            Self::Low => LOW_BUDGET,
            Self::Medium => MEDIUM_BUDGET,
            Self::High => HIGH_BUDGET,
        }
    }
}
