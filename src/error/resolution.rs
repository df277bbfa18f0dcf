use thiserror::Error;

/// Failure raised lazily by a selector's first `resolve()` and cached with it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("could not load container with name: {name}")]
    ContainerNotFound { name: String },

    #[error("failed to load container '{name}': {message}")]
    ContainerLoadFailed { name: String, message: String },

    #[error("could not find member with name [{member}]{} in container [{container}]", .parameter_types.as_ref().map(|p| format!(" and parameter types [{p}]")).unwrap_or_default())]
    MemberNotFound {
        container: String,
        member: String,
        parameter_types: Option<String>,
    },

    #[error("member name [{member}] in container [{container}] is ambiguous; candidates: {}", .candidates.join(", "))]
    AmbiguousMember {
        container: String,
        member: String,
        candidates: Vec<String>,
    },
}

impl ResolutionError {
    pub fn container_not_found(name: impl Into<String>) -> Self {
        Self::ContainerNotFound { name: name.into() }
    }

    pub fn container_load_failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ContainerLoadFailed {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn member_not_found(
        container: impl Into<String>,
        member: impl Into<String>,
        parameter_types: Option<String>,
    ) -> Self {
        Self::MemberNotFound {
            container: container.into(),
            member: member.into(),
            parameter_types,
        }
    }

    pub fn ambiguous_member(
        container: impl Into<String>,
        member: impl Into<String>,
        candidates: Vec<String>,
    ) -> Self {
        Self::AmbiguousMember {
            container: container.into(),
            member: member.into(),
            candidates,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::AmbiguousMember { .. })
    }
}
