use std::fmt;

use crate::error::ParseError;
use crate::utils::split_top_level;

/// Ordered parameter type names used to pick one overload of a member.
///
/// An empty signature (`()`) is a zero-arity match request and is distinct
/// from the absence of a signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ParameterSignature {
    types: Vec<String>,
}

impl ParameterSignature {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the text between a member's parentheses, e.g. `int, java.lang.String`.
    pub fn parse(list: &str) -> Result<Self, ParseError> {
        if list.trim().is_empty() {
            return Ok(Self::empty());
        }

        let mut types = Vec::new();
        for part in split_top_level(list, ',') {
            let part = part.trim();
            if part.is_empty() {
                return Err(ParseError::malformed(
                    list,
                    "parameter list contains an empty type name",
                ));
            }
            types.push(part.to_string());
        }
        Ok(Self { types })
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn arity(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn matches(&self, parameter_types: &[String]) -> bool {
        self.types.as_slice() == parameter_types
    }
}

impl fmt::Display for ParameterSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.types.join(", "))
    }
}
