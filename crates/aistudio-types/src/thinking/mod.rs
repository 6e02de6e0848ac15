//! Thinking-budget types: what the client sent, what the proxy decided.

mod defaults;
mod directive;
mod effort;
mod preset;

pub use defaults::{ProcessDefaults, DEFAULT_THINKING_BUDGET};
pub use directive::{ThinkingDirective, ThinkingMode};
pub use effort::ReasoningEffort;
pub use preset::ThinkingPreset;
