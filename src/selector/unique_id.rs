use std::fmt;

use crate::error::ParseError;

pub const ENGINE_SEGMENT: &str = "engine";
pub const CONTAINER_SEGMENTS: &[&str] = &["class", "container"];
pub const MEMBER_SEGMENTS: &[&str] = &["method", "member"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    kind: String,
    value: String,
}

impl Segment {
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.kind, self.value)
    }
}

/// Path of `[kind:value]` segments addressing one node of a discovered test
/// hierarchy, e.g. `[engine:junit-jupiter]/[class:a.B]/[method:m()]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniqueId {
    segments: Vec<Segment>,
}

impl UniqueId {
    pub fn root(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::new(kind, value)],
        }
    }

    pub fn for_engine(engine: impl Into<String>) -> Self {
        Self::root(ENGINE_SEGMENT, engine)
    }

    /// `[engine:<engine>]/[class:<container>]/[method:<member>]`
    pub fn for_member(engine: &str, container: &str, member: &str) -> Self {
        Self::for_engine(engine)
            .append(CONTAINER_SEGMENTS[0], container)
            .append(MEMBER_SEGMENTS[0], member)
    }

    pub fn append(mut self, kind: impl Into<String>, value: impl Into<String>) -> Self {
        self.segments.push(Segment::new(kind, value));
        self
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::Blank);
        }

        let mut segments = Vec::new();
        let mut rest = input;
        loop {
            let Some(body) = rest.strip_prefix('[') else {
                return Err(ParseError::malformed_unique_id(input, "segment must start with '['"));
            };
            let close = closing_bracket(body)
                .ok_or_else(|| ParseError::malformed_unique_id(input, "unterminated segment"))?;
            let content = &body[..close];
            let (kind, value) = content.split_once(':').ok_or_else(|| {
                ParseError::malformed_unique_id(input, format!("segment '{content}' has no ':'"))
            })?;
            if kind.trim().is_empty() || value.is_empty() {
                return Err(ParseError::malformed_unique_id(
                    input,
                    format!("segment '{content}' needs a type and a value"),
                ));
            }
            segments.push(Segment::new(kind, value));

            rest = &body[close + 1..];
            if rest.is_empty() {
                break;
            }
            rest = rest.strip_prefix('/').ok_or_else(|| {
                ParseError::malformed_unique_id(input, "segments must be separated by '/'")
            })?;
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn last_segment(&self) -> &Segment {
        // never empty: every constructor adds at least one segment
        &self.segments[self.segments.len() - 1]
    }

    pub fn engine(&self) -> Option<&str> {
        self.segment_value(&[ENGINE_SEGMENT])
    }

    pub fn container_name(&self) -> Option<&str> {
        self.segment_value(CONTAINER_SEGMENTS)
    }

    pub fn member_text(&self) -> Option<&str> {
        self.segment_value(MEMBER_SEGMENTS)
    }

    fn segment_value(&self, kinds: &[&str]) -> Option<&str> {
        self.segments
            .iter()
            .rev()
            .find(|s| kinds.contains(&s.kind.as_str()))
            .map(Segment::value)
    }
}

/// Index of the `]` closing a segment body, allowing nested `[]` in values
/// such as `m(int[])`.
fn closing_bracket(body: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in body.char_indices() {
        match c {
            '[' => depth += 1,
            ']' if depth == 0 => return Some(i),
            ']' => depth -= 1,
            _ => {}
        }
    }
    None
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
