use flexq_core::{FieldNode, NodeKind, NodeRef, Variant};

use crate::builder::BuildCtx;
use crate::options::CompileOptions;
use crate::query::{Query, Term};
use crate::{CompileError, Result};

/// Largest edit distance a fuzzy query supports.
pub const MAX_EDITS: u32 = 2;

pub fn build_field(node: NodeRef<'_>, ctx: &BuildCtx<'_, Query>) -> Result<Query> {
    let term = node
        .kind()
        .as_field()
        .ok_or_else(|| CompileError::unexpected_node(Variant::FIELD, node))?;
    Ok(Query::Term(to_term(term, ctx.options())))
}

pub fn build_fuzzy(node: NodeRef<'_>, ctx: &BuildCtx<'_, Query>) -> Result<Query> {
    let NodeKind::Fuzzy(fuzzy) = node.kind() else {
        return Err(CompileError::unexpected_node(Variant::FUZZY, node));
    };
    let term = to_term(&fuzzy.term, ctx.options());
    let max_edits = similarity_to_edits(fuzzy.similarity(), term.text.chars().count());
    Ok(Query::Fuzzy {
        term,
        max_edits,
        prefix_length: fuzzy.prefix_length,
    })
}

pub fn build_match_all(_node: NodeRef<'_>, _ctx: &BuildCtx<'_, Query>) -> Result<Query> {
    Ok(Query::MatchAll)
}

pub fn build_match_none(_node: NodeRef<'_>, _ctx: &BuildCtx<'_, Query>) -> Result<Query> {
    Ok(Query::MatchNone)
}

pub(super) fn to_term(term: &FieldNode, options: &CompileOptions) -> Term {
    Term::new(options.field_or_default(term.field.as_deref()), term.text.clone())
}

/// Whole-number similarities are edit counts; ratios scale with term length.
fn similarity_to_edits(similarity: f32, term_len: usize) -> u32 {
    let edits = if similarity >= 1.0 {
        similarity as u32
    } else if similarity == 0.0 {
        0
    } else {
        ((1.0 - f64::from(similarity)) * term_len as f64) as u32
    };
    edits.min(MAX_EDITS)
}
