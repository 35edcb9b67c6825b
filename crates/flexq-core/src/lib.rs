#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Query node tree for flexq.
//!
//! The tree is the AST an external grammar hands over before compilation:
//! - `tree` - arena storage, parent/child links, cloning, mutation
//! - `nodes` - node variants and their payloads
//! - `proximity` - distance-constrained groups and field propagation
//! - `tags` - per-node side table for intermediate artifacts
//! - `printer` / `query_string` - debug dump and round-trip query syntax
//! - `raw` - JSON interchange with the grammar

mod invariants;

pub mod escape;
pub mod extension;
pub mod message;
pub mod nodes;
pub mod printer;
pub mod proximity;
pub mod query_string;
pub mod raw;
pub mod tags;
pub mod tree;

#[cfg(test)]
mod query_string_tests;
#[cfg(test)]
mod raw_tests;
#[cfg(test)]
mod tags_tests;

use std::fmt;

pub use escape::{EscapeQuerySyntax, StandardEscaper, Verbatim};
pub use extension::ExtensionNode;
pub use message::{Message, MessageKey};
pub use nodes::{Arity, FieldNode, FuzzyNode, Modifier, NodeKind, PLAINTEXT_FIELD, Variant};
pub use printer::TreePrinter;
pub use proximity::{NO_DISTANCE, ProximityNode, ProximityType};
pub use query_string::QueryStringWriter;
pub use raw::{LoadError, RawNode, RawTerm, parse_tree};
pub use tags::{TagKey, TagStore};
pub use tree::{Node, NodeId, NodeRef, QueryTree};

/// Errors raised while constructing or rewiring query nodes.
///
/// Both variants carry a [`Message`] so callers can render or localize
/// them by key instead of matching on text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A variant's attribute combination is structurally invalid.
    #[error("{0}")]
    InvalidParameter(Message),

    /// The node's variant does not allow the requested tree mutation.
    #[error("{0}")]
    ActionNotSupported(Message),
}

impl Error {
    pub fn invalid_parameter(name: &str, value: impl fmt::Display) -> Self {
        Self::InvalidParameter(
            Message::new(MessageKey::ParameterValueNotSupported)
                .arg(name)
                .arg(value),
        )
    }

    pub fn action_not_supported(variant: Variant, action: &str) -> Self {
        Self::ActionNotSupported(
            Message::new(MessageKey::NodeActionNotSupported)
                .arg(variant)
                .arg(action),
        )
    }

    pub fn message(&self) -> &Message {
        match self {
            Self::InvalidParameter(m) | Self::ActionNotSupported(m) => m,
        }
    }
}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, Error>;
