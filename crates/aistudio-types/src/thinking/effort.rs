//! Raw `reasoning_effort` value as it arrives on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The untouched `reasoning_effort` field of a chat-completion request.
///
/// Clients send `null`, an integer, or a string. Anything else JSON can carry
/// (floats, booleans, arrays, objects) lands in
/// [`ReasoningEffort::Unsupported`] so it can still be echoed in diagnostics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ReasoningEffort {
    /// Field missing or `null`.
    #[default]
    Absent,
    /// JSON integer, anywhere in the `i64` or `u64` range.
    Int(i128),
    /// JSON string, whitespace preserved.
    Str(String),
    /// Any other JSON value.
    Unsupported(Value),
}

impl ReasoningEffort {
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Value> for ReasoningEffort {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(s) => Self::Str(s),
            Value::Number(n) => {
                match n.as_i64().map(i128::from).or_else(|| n.as_u64().map(i128::from)) {
                    Some(i) => Self::Int(i),
                    None => Self::Unsupported(Value::Number(n)),
                }
            },
            other => Self::Unsupported(other),
        }
    }
}

impl From<ReasoningEffort> for Value {
    fn from(effort: ReasoningEffort) -> Self {
        match effort {
            ReasoningEffort::Absent => Value::Null,
            ReasoningEffort::Int(i) => i64::try_from(i)
                .map(Value::from)
                .or_else(|_| u64::try_from(i).map(Value::from))
                .unwrap_or_else(|_| Value::String(i.to_string())),
            ReasoningEffort::Str(s) => Value::String(s),
            ReasoningEffort::Unsupported(v) => v,
        }
    }
}

impl From<i64> for ReasoningEffort {
    fn from(i: i64) -> Self {
        Self::Int(i128::from(i))
    }
}

impl From<u64> for ReasoningEffort {
    fn from(u: u64) -> Self {
        Self::Int(i128::from(u))
    }
}

impl From<&str> for ReasoningEffort {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ReasoningEffort {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<T> From<Option<T>> for ReasoningEffort
where
    T: Into<ReasoningEffort>,
{
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Absent, Into::into)
    }
}

/// Renders the value for log lines: `None` when absent, strings verbatim.
impl fmt::Display for ReasoningEffort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("None"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => f.write_str(s),
            Self::Unsupported(v) => write!(f, "{v}"),
        }
    }
}
