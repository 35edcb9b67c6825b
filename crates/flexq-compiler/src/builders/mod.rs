//! Standard builders producing [`Query`] artifacts.

mod boolean;
mod field;
mod phrase;
mod proximity;
mod wrappers;

#[cfg(test)]
mod boolean_tests;

pub use boolean::build_boolean;
pub use field::{MAX_EDITS, build_field, build_fuzzy, build_match_all, build_match_none};
pub use phrase::{build_multi_phrase, build_tokenized_phrase};
pub use proximity::build_proximity;
pub use wrappers::{build_boost, build_group, build_modifier, build_slop};

use flexq_core::{Message, MessageKey, NodeRef, Variant};

use crate::query::{Query, Term};
use crate::registry::BuilderRegistry;
use crate::{CompileError, Result};

/// Registry covering every built-in variant.
///
/// `quoted_field` reaches the field builder and `and`/`or` reach the
/// boolean builder through their fallback chains.
pub fn standard_registry() -> BuilderRegistry<Query> {
    let mut registry = BuilderRegistry::new();
    registry.register_fn(Variant::FIELD, build_field);
    registry.register_fn(Variant::FUZZY, build_fuzzy);
    registry.register_fn(Variant::MATCH_ALL, build_match_all);
    registry.register_fn(Variant::MATCH_NONE, build_match_none);
    registry.register_fn(Variant::BOOLEAN, build_boolean);
    registry.register_fn(Variant::GROUP, build_group);
    registry.register_fn(Variant::MODIFIER, build_modifier);
    registry.register_fn(Variant::BOOST, build_boost);
    registry.register_fn(Variant::SLOP, build_slop);
    registry.register_fn(Variant::TOKENIZED_PHRASE, build_tokenized_phrase);
    registry.register_fn(Variant::MULTI_PHRASE, build_multi_phrase);
    registry.register_fn(Variant::PROXIMITY, build_proximity);
    registry
}

/// The term a phrase child compiled to.
fn expect_term<'q>(parent: NodeRef<'_>, artifact: &'q Query) -> Result<&'q Term> {
    match artifact {
        Query::Term(term) => Ok(term),
        other => {
            let message = Message::new(MessageKey::UnexpectedArtifact)
                .arg(parent.variant())
                .arg("term")
                .arg(other.kind_name());
            Err(CompileError::build(parent.variant(), message))
        }
    }
}
