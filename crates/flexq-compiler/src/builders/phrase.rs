//! Phrase builders.
//!
//! Inside a phrase node, a child's `position_increment` is the absolute
//! position of its term within the phrase.

use std::collections::BTreeMap;

use flexq_core::{Message, MessageKey, NodeRef};

use super::expect_term;
use crate::builder::BuildCtx;
use crate::query::{PhraseStep, Query, Term};
use crate::{CompileError, Result};

/// One term per position; positions must never decrease.
pub fn build_tokenized_phrase(node: NodeRef<'_>, ctx: &BuildCtx<'_, Query>) -> Result<Query> {
    let mut terms: Vec<(Term, u32)> = Vec::with_capacity(node.child_count());
    for child in node.children() {
        let position = position_of(node, child)?;
        if let Some(&(_, last)) = terms.last()
            && position < last
        {
            let message = Message::new(MessageKey::PositionsOutOfOrder)
                .arg(position)
                .arg(last);
            return Err(CompileError::build(node.variant(), message));
        }
        let term = expect_term(node, ctx.artifact(child.id())?)?;
        terms.push((term.clone(), position));
    }
    Ok(Query::Phrase { terms, slop: 0 })
}

/// Terms sharing a position become alternatives of one step; steps come
/// out in ascending position order whatever the child order.
pub fn build_multi_phrase(node: NodeRef<'_>, ctx: &BuildCtx<'_, Query>) -> Result<Query> {
    let mut buckets: BTreeMap<u32, Vec<Term>> = BTreeMap::new();
    for child in node.children() {
        let position = position_of(node, child)?;
        let term = expect_term(node, ctx.artifact(child.id())?)?;
        buckets.entry(position).or_default().push(term.clone());
    }

    let steps = buckets
        .into_iter()
        .map(|(position, terms)| PhraseStep { position, terms })
        .collect();
    Ok(Query::MultiPhrase { steps, slop: 0 })
}

fn position_of(phrase: NodeRef<'_>, child: NodeRef<'_>) -> Result<u32> {
    match child.kind().as_field() {
        Some(term) => Ok(term.position_increment),
        None => Err(CompileError::unexpected_node(phrase.variant(), child)),
    }
}
