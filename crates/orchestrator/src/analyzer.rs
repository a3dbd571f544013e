//! Keyword-based task analysis.
//!
//! Classification is a small deterministic rule set, not NLP: a default
//! descriptor plus two independent keyword checks that may both fire on
//! the same message.

use serde::{Deserialize, Serialize};

/// Keywords that mark a message as code-related.
const CODE_KEYWORDS: &[&str] = &["code", "function", "programming", "python", "javascript"];

/// Keywords that mark a message as needing external lookup.
const TOOL_KEYWORDS: &[&str] = &["search", "browse", "calculate", "find", "look up"];

/// Estimated complexity of one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// Structured classification of one message, derived fresh per message
/// and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    /// Estimated complexity.
    pub complexity: Complexity,
    /// Whether the task benefits from multi-step reasoning.
    pub requires_reasoning: bool,
    /// Whether the message asks for code.
    pub requires_code: bool,
    /// Whether the message needs external lookup.
    pub requires_tools: bool,
    /// Free-form domain tag.
    pub domain: String,
}

impl Default for TaskDescriptor {
    fn default() -> Self {
        Self {
            complexity: Complexity::Medium,
            requires_reasoning: true,
            requires_code: false,
            requires_tools: false,
            domain: "general".to_string(),
        }
    }
}

/// Analyze a message into a [`TaskDescriptor`].
///
/// Pure and total: never fails, no side effects. Both keyword rules are
/// independent; a message can set `requires_code` and `requires_tools`
/// at once.
pub fn analyze(message: &str) -> TaskDescriptor {
    let mut descriptor = TaskDescriptor::default();
    let lowered = message.to_lowercase();

    if CODE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        descriptor.requires_code = true;
        descriptor.complexity = Complexity::High;
    }

    if TOOL_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        descriptor.requires_tools = true;
    }

    descriptor
}
