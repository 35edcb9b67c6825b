//! The builder seam.
//!
//! A builder turns one node into an artifact, given the artifacts already
//! built for its children. Any `Fn(NodeRef, &BuildCtx<A>) -> Result<A>`
//! closure or function is a builder.

use flexq_core::{Message, MessageKey, NodeId, NodeRef, QueryTree, TagStore};

use crate::compiler::BUILDER_TAG;
use crate::options::CompileOptions;
use crate::{CompileError, Result};

pub trait Builder<A>: Send + Sync {
    fn build(&self, node: NodeRef<'_>, ctx: &BuildCtx<'_, A>) -> Result<A>;
}

impl<A, F> Builder<A> for F
where
    F: Fn(NodeRef<'_>, &BuildCtx<'_, A>) -> Result<A> + Send + Sync,
{
    fn build(&self, node: NodeRef<'_>, ctx: &BuildCtx<'_, A>) -> Result<A> {
        self(node, ctx)
    }
}

/// What a builder can see besides its own node.
pub struct BuildCtx<'c, A> {
    tree: &'c QueryTree,
    tags: &'c TagStore<A>,
    options: &'c CompileOptions,
}

impl<'c, A> BuildCtx<'c, A> {
    pub(crate) fn new(
        tree: &'c QueryTree,
        tags: &'c TagStore<A>,
        options: &'c CompileOptions,
    ) -> Self {
        Self {
            tree,
            tags,
            options,
        }
    }

    pub fn tree(&self) -> &'c QueryTree {
        self.tree
    }

    pub fn options(&self) -> &'c CompileOptions {
        self.options
    }

    /// Artifact already built for `id`.
    pub fn artifact(&self, id: NodeId) -> Result<&'c A> {
        self.tags.get(id, BUILDER_TAG).ok_or_else(|| {
            let message = Message::new(MessageKey::MissingArtifact)
                .arg(self.tree.kind(id).variant())
                .arg(id);
            CompileError::build(self.tree.kind(id).variant(), message)
        })
    }

    /// Artifacts of all children of `node`, in child order.
    pub fn child_artifacts(&self, node: NodeRef<'_>) -> Result<Vec<&'c A>> {
        node.children().map(|c| self.artifact(c.id())).collect()
    }

    /// Artifact of the only child of a single-child wrapper.
    pub fn child_artifact(&self, node: NodeRef<'_>) -> Result<&'c A> {
        let Some(child) = node.child(0) else {
            let message = Message::new(MessageKey::MissingChild).arg(node.variant());
            return Err(CompileError::build(node.variant(), message));
        };
        self.artifact(child.id())
    }
}
