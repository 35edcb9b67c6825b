use flexq_core::{Message, MessageKey, Modifier, NodeKind, NodeRef, StandardEscaper};

use crate::builder::BuildCtx;
use crate::query::{Clause, Occur, Query};
use crate::{CompileError, Result};

/// Builds `boolean`, and `and`/`or` through their fallback chain.
///
/// A `modifier` child decides its own occurrence; other children get the
/// node's default: required under `and`, optional otherwise.
pub fn build_boolean(node: NodeRef<'_>, ctx: &BuildCtx<'_, Query>) -> Result<Query> {
    let max = ctx.options().max_clauses();
    if node.child_count() > max {
        let message = Message::new(MessageKey::TooManyBooleanClauses)
            .arg(max)
            .arg(node.to_query_string(&StandardEscaper));
        return Err(CompileError::build(node.variant(), message));
    }

    let default_occur = match node.kind() {
        NodeKind::And => Occur::Must,
        _ => Occur::Should,
    };

    let mut clauses = Vec::with_capacity(node.child_count());
    for child in node.children() {
        let occur = match child.kind() {
            NodeKind::Modifier(Modifier::Req) => Occur::Must,
            NodeKind::Modifier(Modifier::Not) => Occur::MustNot,
            _ => default_occur,
        };
        let query = ctx.artifact(child.id())?.clone();
        clauses.push(Clause { occur, query });
    }
    Ok(Query::Boolean { clauses })
}
