//! Thinking-budget handling for chat-completion requests.
//!
//! `reasoning_effort` arrives as `null`, an integer, or a string in several
//! spellings. [`normalize`] turns it into a [`ThinkingDirective`] without ever
//! rejecting the request; [`format_directive`] renders the result for logs.

pub mod format;
pub mod normalizer;
pub mod request;


pub use format::format_directive;
pub use normalizer::{classify, normalize, resolve_budget, Classification};
pub use request::{reasoning_effort_from_body, ChatCompletionRequest};

pub use aistudio_types::{ProcessDefaults, ReasoningEffort, ThinkingDirective, ThinkingMode};
