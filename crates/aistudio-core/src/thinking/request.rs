//! Input boundary: pulling `reasoning_effort` out of a chat-completion body.

use aistudio_types::{ProcessDefaults, ReasoningEffort, ThinkingDirective};
use serde::Deserialize;
use serde_json::Value;

use super::normalizer::normalize;

/// The slice of an OpenAI chat-completion request this crate cares about.
///
/// Unknown fields are ignored; message contents are left as raw JSON for the
/// translation layer.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    #[serde(default)]
    pub messages: Vec<Value>,
    #[serde(default)]
    pub stream: bool,
    #[serde(default)]
    pub reasoning_effort: ReasoningEffort,
}

impl ChatCompletionRequest {
    pub fn thinking_directive(&self, defaults: &ProcessDefaults) -> ThinkingDirective {
        normalize(self.reasoning_effort.clone(), defaults)
    }
}

/// Reads `reasoning_effort` from an arbitrary request body.
///
/// A missing key, a `null`, or a body that is not an object all yield
/// [`ReasoningEffort::Absent`].
pub fn reasoning_effort_from_body(body: &Value) -> ReasoningEffort {
    body.get("reasoning_effort").cloned().map(ReasoningEffort::from).unwrap_or_default()
}
