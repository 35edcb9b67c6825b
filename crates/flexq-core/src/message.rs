//! Structured, key-addressed error messages.
//!
//! A [`Message`] pairs a machine-readable [`MessageKey`] with positional
//! arguments. Rendering substitutes `{n}` placeholders in the key's
//! template; callers that localize look up their own template by
//! [`MessageKey::code`] and reuse the same arguments.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageKey {
    // Construction time
    ParameterValueNotSupported,
    NodeActionNotSupported,

    // Dispatch
    QueryConversionError,

    // Builder-internal
    TooManyBooleanClauses,
    UnexpectedArtifact,
    UnexpectedNode,
    MissingArtifact,
    MissingChild,
    PositionsOutOfOrder,
}

impl MessageKey {
    /// Stable identifier for lookups in external message catalogs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ParameterValueNotSupported => "PARAMETER_VALUE_NOT_SUPPORTED",
            Self::NodeActionNotSupported => "NODE_ACTION_NOT_SUPPORTED",
            Self::QueryConversionError => "QUERY_CONVERSION_ERROR",
            Self::TooManyBooleanClauses => "TOO_MANY_BOOLEAN_CLAUSES",
            Self::UnexpectedArtifact => "UNEXPECTED_ARTIFACT",
            Self::UnexpectedNode => "UNEXPECTED_NODE",
            Self::MissingArtifact => "MISSING_ARTIFACT",
            Self::MissingChild => "MISSING_CHILD",
            Self::PositionsOutOfOrder => "POSITIONS_OUT_OF_ORDER",
        }
    }

    /// Default English template. `{n}` refers to the n-th argument.
    pub fn template(&self) -> &'static str {
        match self {
            Self::ParameterValueNotSupported => "parameter `{0}` does not support value `{1}`",
            Self::NodeActionNotSupported => "`{0}` node does not support this action: {1}",
            Self::QueryConversionError => "cannot compile `{0}`: no builder registered for `{1}`",
            Self::TooManyBooleanClauses => {
                "too many boolean clauses, the maximum supported is {0}: {1}"
            }
            Self::UnexpectedArtifact => "`{0}` builder expected a {1} artifact, found {2}",
            Self::UnexpectedNode => "`{0}` builder cannot compile `{1}` nodes",
            Self::MissingArtifact => "`{0}` node {1} has no compiled artifact",
            Self::MissingChild => "`{0}` node requires a child",
            Self::PositionsOutOfOrder => "phrase position {0} follows position {1}",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    key: MessageKey,
    args: Vec<String>,
}

impl Message {
    pub fn new(key: MessageKey) -> Self {
        Self {
            key,
            args: Vec::new(),
        }
    }

    /// Append the next positional argument.
    pub fn arg(mut self, value: impl fmt::Display) -> Self {
        self.args.push(value.to_string());
        self
    }

    pub fn key(&self) -> MessageKey {
        self.key
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.key.template();
        while let Some(start) = rest.find('{') {
            f.write_str(&rest[..start])?;
            let tail = &rest[start + 1..];
            let Some(end) = tail.find('}') else {
                return f.write_str(&rest[start..]);
            };

            // Unknown or missing placeholders are printed verbatim
            match tail[..end].parse::<usize>().ok().and_then(|i| self.args.get(i)) {
                Some(arg) => f.write_str(arg)?,
                None => f.write_str(&rest[start..start + end + 2])?,
            }
            rest = &tail[end + 1..];
        }
        f.write_str(rest)
    }
}
