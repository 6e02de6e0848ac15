//! The canonical thinking directive handed to request translation.

use serde::Serialize;
use std::num::NonZeroU64;

use super::defaults::ProcessDefaults;
use super::effort::ReasoningEffort;

/// Off, on without a cap, or on with a positive token cap.
///
/// Encoding the decision as one enum keeps the flat flags consistent: a budget
/// cannot exist without thinking, and a bounded budget is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThinkingMode {
    Disabled,
    Unbounded,
    Bounded(NonZeroU64),
}

impl ThinkingMode {
    #[inline]
    pub fn thinking_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }

    #[inline]
    pub fn budget_enabled(self) -> bool {
        matches!(self, Self::Bounded(_))
    }

    #[inline]
    pub fn budget_value(self) -> Option<NonZeroU64> {
        match self {
            Self::Bounded(budget) => Some(budget),
            Self::Disabled | Self::Unbounded => None,
        }
    }
}

/// Result of normalizing one `reasoning_effort` value.
///
/// Created per request and consumed by the translation layer. The raw input is
/// kept only for audit logging and is never interpreted again.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "DirectiveRecord")]
pub struct ThinkingDirective {
    mode: ThinkingMode,
    original_value: ReasoningEffort,
}

impl ThinkingDirective {
    pub fn new(mode: ThinkingMode, original_value: ReasoningEffort) -> Self {
        Self { mode, original_value }
    }

    pub fn disabled(original_value: ReasoningEffort) -> Self {
        Self::new(ThinkingMode::Disabled, original_value)
    }

    pub fn unbounded(original_value: ReasoningEffort) -> Self {
        Self::new(ThinkingMode::Unbounded, original_value)
    }

    pub fn bounded(budget: NonZeroU64, original_value: ReasoningEffort) -> Self {
        Self::new(ThinkingMode::Bounded(budget), original_value)
    }

    pub fn from_defaults(defaults: &ProcessDefaults, original_value: ReasoningEffort) -> Self {
        Self::new(defaults.mode(), original_value)
    }

    #[inline]
    pub fn mode(&self) -> ThinkingMode {
        self.mode
    }

    #[inline]
    pub fn thinking_enabled(&self) -> bool {
        self.mode.thinking_enabled()
    }

    #[inline]
    pub fn budget_enabled(&self) -> bool {
        self.mode.budget_enabled()
    }

    #[inline]
    pub fn budget_value(&self) -> Option<NonZeroU64> {
        self.mode.budget_value()
    }

    #[inline]
    pub fn original_value(&self) -> &ReasoningEffort {
        &self.original_value
    }

    /// Flags without the raw input, for comparing directives across inputs.
    pub fn flags(&self) -> (bool, bool, Option<u64>) {
        (self.thinking_enabled(), self.budget_enabled(), self.budget_value().map(NonZeroU64::get))
    }
}

/// Flat wire shape of a directive.
#[derive(Serialize)]
struct DirectiveRecord {
    thinking_enabled: bool,
    budget_enabled: bool,
    budget_value: Option<u64>,
    original_value: ReasoningEffort,
}

impl From<ThinkingDirective> for DirectiveRecord {
    fn from(directive: ThinkingDirective) -> Self {
        let (thinking_enabled, budget_enabled, budget_value) = directive.flags();
        Self { thinking_enabled, budget_enabled, budget_value, original_value: directive.original_value }
    }
}
