//! Variants defined outside this crate.
//!
//! An extension node plugs into every tree operation through this trait:
//! the printer asks it for an element name and attributes, the query
//! string writer hands it the already-serialized children, and the
//! compiler dispatches on its [`Variant`]. Builders recover the concrete
//! type with [`ExtensionNode::as_any`].

use std::any::Any;
use std::fmt;

use crate::escape::EscapeQuerySyntax;
use crate::nodes::{Arity, Variant};

pub trait ExtensionNode: fmt::Debug + Send + Sync {
    fn variant(&self) -> Variant;

    /// Variants whose builders may compile this node when it has none of its own.
    fn fallbacks(&self) -> &'static [Variant] {
        &[]
    }

    fn arity(&self) -> Arity;

    /// Element name in the debug dump.
    fn element(&self) -> &'static str;

    /// Attributes in the debug dump, in print order.
    fn attributes(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn to_query_string(&self, children: &[String], escaper: &dyn EscapeQuerySyntax) -> String;

    fn clone_box(&self) -> Box<dyn ExtensionNode>;

    fn as_any(&self) -> &dyn Any;
}

impl Clone for Box<dyn ExtensionNode> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
