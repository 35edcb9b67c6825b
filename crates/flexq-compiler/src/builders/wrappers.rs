//! Builders for single-child wrappers.
//!
//! Group and modifier contribute nothing of their own: a modifier's
//! occurrence is read by the enclosing boolean builder.

use flexq_core::{NodeKind, NodeRef, Variant};

use crate::builder::BuildCtx;
use crate::query::Query;
use crate::{CompileError, Result};

pub fn build_group(node: NodeRef<'_>, ctx: &BuildCtx<'_, Query>) -> Result<Query> {
    ctx.child_artifact(node).cloned()
}

pub fn build_modifier(node: NodeRef<'_>, ctx: &BuildCtx<'_, Query>) -> Result<Query> {
    ctx.child_artifact(node).cloned()
}

pub fn build_boost(node: NodeRef<'_>, ctx: &BuildCtx<'_, Query>) -> Result<Query> {
    let NodeKind::Boost(boost) = node.kind() else {
        return Err(CompileError::unexpected_node(Variant::BOOST, node));
    };
    let query = ctx.child_artifact(node)?.clone();
    Ok(Query::Boost {
        query: Box::new(query),
        boost: *boost,
    })
}

/// Applies to phrase artifacts; anything else passes through unchanged.
pub fn build_slop(node: NodeRef<'_>, ctx: &BuildCtx<'_, Query>) -> Result<Query> {
    let NodeKind::Slop(value) = node.kind() else {
        return Err(CompileError::unexpected_node(Variant::SLOP, node));
    };
    let query = match ctx.child_artifact(node)?.clone() {
        Query::Phrase { terms, .. } => Query::Phrase {
            terms,
            slop: *value,
        },
        Query::MultiPhrase { steps, .. } => Query::MultiPhrase {
            steps,
            slop: *value,
        },
        other => other,
    };
    Ok(query)
}
