//! `reasoning_effort` -> [`ThinkingDirective`].
//!
//! Rules are tried in order and the first match wins:
//!
//! | Rule          | Inputs                                         | Mode                |
//! |---------------|------------------------------------------------|---------------------|
//! | `Absent`      | missing / `null`                               | process defaults    |
//! | `ExplicitOff` | `0`, `"0"` (trimmed)                           | disabled            |
//! | `Unbounded`   | `-1`, `"-1"`, `"none"` (trimmed, any case)     | on, no cap          |
//! | `Bounded`     | positive int, `"low"`/`"medium"`/`"high"`, `"2000"` | on, capped     |
//! | `Fallback`    | everything else                                | process defaults    |

use aistudio_types::{
    ProcessDefaults, ReasoningEffort, ThinkingDirective, ThinkingMode, ThinkingPreset,
};
use std::num::NonZeroU64;

/// Which rule matched a raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Absent,
    ExplicitOff,
    Unbounded,
    Bounded(NonZeroU64),
    /// Present but unrecognized; treated exactly like `Absent`.
    Fallback,
}

impl Classification {
    pub fn rule(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::ExplicitOff => "explicit_off",
            Self::Unbounded => "unbounded",
            Self::Bounded(_) => "bounded",
            Self::Fallback => "fallback",
        }
    }

    /// Resolves the rule against the process defaults.
    pub fn resolve(self, defaults: &ProcessDefaults) -> ThinkingMode {
        match self {
            Self::Absent | Self::Fallback => defaults.mode(),
            Self::ExplicitOff => ThinkingMode::Disabled,
            Self::Unbounded => ThinkingMode::Unbounded,
            Self::Bounded(budget) => ThinkingMode::Bounded(budget),
        }
    }
}

/// Classifies a raw value without consulting defaults.
pub fn classify(raw: &ReasoningEffort) -> Classification {
    if raw.is_absent() {
        Classification::Absent
    } else if is_explicit_off(raw) {
        Classification::ExplicitOff
    } else if is_unbounded(raw) {
        Classification::Unbounded
    } else if let Some(budget) = resolve_budget(raw) {
        Classification::Bounded(budget)
    } else {
        Classification::Fallback
    }
}

/// Normalizes a raw `reasoning_effort` into a directive. Never fails.
pub fn normalize(raw: ReasoningEffort, defaults: &ProcessDefaults) -> ThinkingDirective {
    let classification = classify(&raw);

    if classification == Classification::Fallback {
        tracing::warn!(
            "[Thinking] Unrecognized reasoning_effort {:?}, using defaults (thinking={}, budget={})",
            raw.to_string(),
            defaults.default_thinking_enabled,
            defaults.default_budget
        );
    } else {
        tracing::debug!(
            "[Thinking] reasoning_effort {:?} matched rule {}",
            raw.to_string(),
            classification.rule()
        );
    }

    ThinkingDirective::new(classification.resolve(defaults), raw)
}

/// Extracts a positive token budget from an integer, a preset name, or a
/// numeric string. `None` means "not a budget", never an error.
pub fn resolve_budget(raw: &ReasoningEffort) -> Option<NonZeroU64> {
    match raw {
        ReasoningEffort::Int(value) => positive(*value),
        ReasoningEffort::Str(s) => {
            let key = fold(s);
            if let Some(preset) = ThinkingPreset::from_name(&key) {
                return Some(preset.budget());
            }
            key.parse::<i128>().ok().and_then(positive)
        },
        ReasoningEffort::Absent | ReasoningEffort::Unsupported(_) => None,
    }
}

fn is_explicit_off(raw: &ReasoningEffort) -> bool {
    match raw {
        ReasoningEffort::Int(value) => *value == 0,
        ReasoningEffort::Str(s) => s.trim() == "0",
        ReasoningEffort::Absent | ReasoningEffort::Unsupported(_) => false,
    }
}

fn is_unbounded(raw: &ReasoningEffort) -> bool {
    match raw {
        ReasoningEffort::Int(value) => *value == -1,
        ReasoningEffort::Str(s) => matches!(fold(s).as_str(), "none" | "-1"),
        ReasoningEffort::Absent | ReasoningEffort::Unsupported(_) => false,
    }
}

fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

fn positive(value: i128) -> Option<NonZeroU64> {
    u64::try_from(value).ok().and_then(NonZeroU64::new)
}
