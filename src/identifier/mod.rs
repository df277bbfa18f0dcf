//! Selector text parsing.
//!
//! ```text
//! selector       := container-part ["#" member-part] | member-part
//! container-part := qualified-name
//! member-part    := member-name ["(" param-list ")"]
//! param-list     := "" | type-name ("," type-name)*
//! ```
//!
//! Names are never interpreted here. A container or member that is not a
//! valid identifier in any host language is accepted and left for the
//! locator to reject.
mod signature;

pub use signature::ParameterSignature;

use std::fmt;

use crate::error::ParseError;

pub const MEMBER_SEPARATOR: char = '#';

/// A member name with its optional parameter signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberName {
    name: String,
    signature: Option<ParameterSignature>,
}

impl MemberName {
    pub fn new(name: impl Into<String>, signature: Option<ParameterSignature>) -> Self {
        Self {
            name: name.into(),
            signature,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> Option<&ParameterSignature> {
        self.signature.as_ref()
    }

    pub fn into_parts(self) -> (String, Option<ParameterSignature>) {
        (self.name, self.signature)
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.signature {
            Some(sig) => write!(f, "{}({})", self.name, sig),
            None => write!(f, "{}", self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParsedIdentifier {
    /// `a.b.C`
    Container { container: String },
    /// `a.b.C#m` or `a.b.C#m(T1, T2)`
    Member { container: String, member: MemberName },
    /// `m(T1, T2)` with the container known from context.
    MemberSignature(MemberName),
}

impl ParsedIdentifier {
    pub fn container_name(&self) -> Option<&str> {
        match self {
            Self::Container { container } | Self::Member { container, .. } => Some(container),
            Self::MemberSignature(_) => None,
        }
    }

    pub fn member(&self) -> Option<&MemberName> {
        match self {
            Self::Container { .. } => None,
            Self::Member { member, .. } | Self::MemberSignature(member) => Some(member),
        }
    }
}

impl fmt::Display for ParsedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container { container } => write!(f, "{container}"),
            Self::Member { container, member } => {
                write!(f, "{container}{MEMBER_SEPARATOR}{member}")
            }
            Self::MemberSignature(member) => write!(f, "{member}"),
        }
    }
}

/// Parses raw selector text. The container/member split happens at the
/// first `#`; everything after it is the member part, kept verbatim.
pub fn parse(raw: &str) -> Result<ParsedIdentifier, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::Blank);
    }

    if let Some((container, member)) = raw.split_once(MEMBER_SEPARATOR) {
        if container.trim().is_empty() {
            return Err(ParseError::malformed(raw, "container name is empty"));
        }
        if container.contains(['(', ')']) {
            return Err(ParseError::malformed(
                raw,
                "container name must not contain parentheses",
            ));
        }
        if member.trim().is_empty() {
            return Err(ParseError::malformed(raw, "member name is empty"));
        }
        let member = parse_member(member)?;
        return Ok(ParsedIdentifier::Member {
            container: container.to_string(),
            member,
        });
    }

    if raw.contains(['(', ')']) {
        return parse_member(raw).map(ParsedIdentifier::MemberSignature);
    }

    Ok(ParsedIdentifier::Container {
        container: raw.to_string(),
    })
}

/// Parses a member part: `name` or `name(params)`. Text that does not end
/// with its parameter list is returned verbatim with no signature.
pub fn parse_member(text: &str) -> Result<MemberName, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::Blank);
    }

    if !is_balanced(text) {
        return Err(ParseError::unbalanced_parentheses(text));
    }
    let Some(open) = text.find('(') else {
        return Ok(MemberName::new(text, None));
    };
    let close = matching_close(text, open).ok_or_else(|| ParseError::unbalanced_parentheses(text))?;

    // `adds (two) numbers` is a display name, not a signature.
    if close + 1 != text.len() {
        return Ok(MemberName::new(text, None));
    }

    let name = &text[..open];
    if name.trim().is_empty() {
        return Err(ParseError::malformed(text, "member name is empty"));
    }

    let signature = ParameterSignature::parse(&text[open + 1..close])?;
    Ok(MemberName::new(name, Some(signature)))
}

fn is_balanced(text: &str) -> bool {
    let mut depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => depth += 1,
            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            _ => {}
        }
    }
    depth == 0
}

fn matching_close(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}
