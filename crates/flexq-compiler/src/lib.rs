#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Bottom-up compilation of flexq query trees.
//!
//! A [`TreeCompiler`] walks a [`QueryTree`](flexq_core::QueryTree) in
//! post-order and hands every node to the [`Builder`] that the
//! [`BuilderRegistry`] maps its variant to. Each builder reads the
//! artifacts its children produced from a [`TagStore`](flexq_core::TagStore)
//! and returns its own. The compiler is generic over the artifact type;
//! [`standard_registry`] covers every built-in variant with [`Query`].

pub mod builder;
pub mod builders;
pub mod compiler;
pub mod options;
pub mod query;
pub mod registry;


pub use builder::{BuildCtx, Builder};
pub use builders::standard_registry;
pub use compiler::{BUILDER_TAG, TreeCompiler};
pub use options::CompileOptions;
pub use query::{Clause, Occur, PhraseStep, Query, Term, Within};
pub use registry::BuilderRegistry;

use flexq_core::{Message, MessageKey, NodeRef, StandardEscaper, Variant};

/// Errors raised while compiling a tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error("query tree has no root")]
    EmptyTree,

    /// No builder is registered for the variant or anything in its fallback chain.
    #[error("{message}")]
    UnregisteredVariant { variant: Variant, message: Message },

    /// A builder rejected its node.
    #[error("{message}")]
    Build { variant: Variant, message: Message },

    #[error(transparent)]
    Node(#[from] flexq_core::Error),
}

impl CompileError {
    pub fn build(variant: Variant, message: Message) -> Self {
        Self::Build { variant, message }
    }

    pub(crate) fn unregistered(node: NodeRef<'_>) -> Self {
        let variant = node.variant();
        let message = Message::new(MessageKey::QueryConversionError)
            .arg(node.to_query_string(&StandardEscaper))
            .arg(variant);
        Self::UnregisteredVariant { variant, message }
    }

    /// `builder` was handed a node it does not know how to read.
    pub fn unexpected_node(builder: Variant, node: NodeRef<'_>) -> Self {
        let message = Message::new(MessageKey::UnexpectedNode)
            .arg(builder)
            .arg(node.variant());
        Self::build(node.variant(), message)
    }

    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::EmptyTree => None,
            Self::UnregisteredVariant { message, .. } | Self::Build { message, .. } => Some(message),
            Self::Node(err) => Some(err.message()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompileError>;
