use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("selector must not be blank")]
    Blank,

    #[error("malformed selector '{input}': {reason}")]
    Malformed { input: String, reason: String },

    #[error("unbalanced parentheses in selector '{input}'")]
    UnbalancedParentheses { input: String },

    #[error("malformed unique id '{input}': {reason}")]
    MalformedUniqueId { input: String, reason: String },
}

impl ParseError {
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn unbalanced_parentheses(input: impl Into<String>) -> Self {
        Self::UnbalancedParentheses {
            input: input.into(),
        }
    }

    pub fn malformed_unique_id(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedUniqueId {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
