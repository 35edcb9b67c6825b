use tracing::{debug, trace};

use flexq_core::{Message, MessageKey, NodeId, QueryTree, TagKey, TagStore};

use crate::builder::BuildCtx;
use crate::builders::standard_registry;
use crate::options::CompileOptions;
use crate::query::Query;
use crate::registry::BuilderRegistry;
use crate::{CompileError, Result};

/// Tag under which every node's artifact is stored.
pub const BUILDER_TAG: TagKey = TagKey::new("builder_artifact");

/// Post-order tree compiler.
///
/// Children are always built before their parent, so a builder can rely
/// on finding every child artifact under [`BUILDER_TAG`]. The first
/// failure aborts the whole compile: a subtree is never skipped, and no
/// ancestor of a failed node is ever handed to its builder.
pub struct TreeCompiler<A> {
    registry: BuilderRegistry<A>,
    options: CompileOptions,
}

impl TreeCompiler<Query> {
    /// Compiler over the built-in variants.
    pub fn standard() -> Self {
        Self::new(standard_registry())
    }
}

impl<A> TreeCompiler<A> {
    pub fn new(registry: BuilderRegistry<A>) -> Self {
        Self {
            registry,
            options: CompileOptions::default(),
        }
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn registry(&self) -> &BuilderRegistry<A> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut BuilderRegistry<A> {
        &mut self.registry
    }

    /// Compile the tree from its root.
    pub fn compile(&self, tree: &QueryTree) -> Result<A> {
        let root = tree.root().ok_or(CompileError::EmptyTree)?;
        self.compile_node(tree, root)
    }

    /// Compile the subtree at `id` and return its artifact.
    pub fn compile_node(&self, tree: &QueryTree, id: NodeId) -> Result<A> {
        let mut tags = self.compile_tagged(tree, id)?;
        tags.remove(id, BUILDER_TAG).ok_or_else(|| {
            let variant = tree.kind(id).variant();
            let message = Message::new(MessageKey::MissingArtifact).arg(variant).arg(id);
            CompileError::build(variant, message)
        })
    }

    /// Compile the subtree at `id`, keeping the artifact of every node.
    pub fn compile_tagged(&self, tree: &QueryTree, id: NodeId) -> Result<TagStore<A>> {
        let order = tree.post_order(id);
        debug!(root = %tree.get(id).variant(), nodes = order.len(), "compiling query tree");

        let mut tags = TagStore::new();
        for node_id in order {
            let node = tree.get(node_id);
            let builder = self
                .registry
                .lookup(node)
                .ok_or_else(|| CompileError::unregistered(node))?;

            let ctx = BuildCtx::new(tree, &tags, &self.options);
            let artifact = builder.build(node, &ctx)?;
            trace!(node = %node_id, variant = %node.variant(), "built node");
            tags.set(node_id, BUILDER_TAG, artifact);
        }

        debug!(artifacts = tags.len(), "compiled query tree");
        Ok(tags)
    }
}
