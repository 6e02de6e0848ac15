//! Human-readable rendering of a directive for request logs.

use aistudio_types::{ThinkingDirective, ThinkingMode};

/// One-line summary of a directive, echoing the raw client value.
pub fn format_directive(directive: &ThinkingDirective) -> String {
    let original = directive.original_value();
    match directive.mode() {
        ThinkingMode::Disabled => format!("thinking disabled (original value: {original})"),
        ThinkingMode::Bounded(budget) => {
            format!("thinking enabled with budget: {budget} tokens (original value: {original})")
        },
        ThinkingMode::Unbounded => {
            format!("thinking enabled, no budget limit (original value: {original})")
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aistudio_types::ReasoningEffort;
    use std::num::NonZeroU64;

    #[test]
    fn test_disabled_message() {
        let directive = ThinkingDirective::disabled(ReasoningEffort::Int(0));
        assert_eq!(format_directive(&directive), "thinking disabled (original value: 0)");
    }

    #[test]
    fn test_absent_original_renders_none() {
        let directive = ThinkingDirective::disabled(ReasoningEffort::Absent);
        assert_eq!(format_directive(&directive), "thinking disabled (original value: None)");
    }

    #[test]
    fn test_unbounded_message() {
        let directive = ThinkingDirective::unbounded("none".into());
        assert_eq!(
            format_directive(&directive),
            "thinking enabled, no budget limit (original value: none)"
        );
    }

    #[test]
    fn test_bounded_message_keeps_raw_whitespace() {
        let budget = NonZeroU64::new(3000).unwrap_or(NonZeroU64::MIN);
        let directive = ThinkingDirective::bounded(budget, " 3000 ".into());
        assert_eq!(
            format_directive(&directive),
            "thinking enabled with budget: 3000 tokens (original value:  3000 )"
        );
    }
}
