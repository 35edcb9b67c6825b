use indexmap::IndexMap;
use tracing::debug;

use flexq_core::{NodeRef, Variant};

use crate::Result;
use crate::builder::{BuildCtx, Builder};

/// Maps node variants, and optionally field names, to builders.
///
/// Lookup order for a node:
/// 1. a field builder, if the node is a field leaf bound to a registered field
/// 2. the builder for the node's own variant
/// 3. builders along the variant's fallback chain, nearest first
pub struct BuilderRegistry<A> {
    variants: IndexMap<Variant, Box<dyn Builder<A>>>,
    fields: IndexMap<String, Box<dyn Builder<A>>>,
}

impl<A> Default for BuilderRegistry<A> {
    fn default() -> Self {
        Self {
            variants: IndexMap::new(),
            fields: IndexMap::new(),
        }
    }
}

impl<A> BuilderRegistry<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `builder` for `variant`, replacing any previous one.
    pub fn register(&mut self, variant: Variant, builder: impl Builder<A> + 'static) {
        debug!(%variant, "registered builder");
        self.variants.insert(variant, Box::new(builder));
    }

    /// Closure form of [`Self::register`].
    pub fn register_fn<F>(&mut self, variant: Variant, builder: F)
    where
        F: Fn(NodeRef<'_>, &BuildCtx<'_, A>) -> Result<A> + Send + Sync + 'static,
    {
        self.register(variant, builder);
    }

    /// Register `builder` for every field leaf bound to `field`.
    pub fn register_field(&mut self, field: impl Into<String>, builder: impl Builder<A> + 'static) {
        let field = field.into();
        debug!(%field, "registered field builder");
        self.fields.insert(field, Box::new(builder));
    }

    pub fn lookup(&self, node: NodeRef<'_>) -> Option<&dyn Builder<A>> {
        let kind = node.kind();
        let leaf_field = kind.as_field().and_then(|t| t.field.as_deref());
        if let Some(builder) = leaf_field.and_then(|f| self.fields.get(f)) {
            return Some(builder.as_ref());
        }
        std::iter::once(kind.variant())
            .chain(kind.fallbacks().iter().copied())
            .find_map(|v| self.variants.get(&v))
            .map(|b| b.as_ref())
    }

    pub fn contains(&self, variant: Variant) -> bool {
        self.variants.contains_key(&variant)
    }

    /// Registered variants, in registration order.
    pub fn variants(&self) -> impl Iterator<Item = Variant> + '_ {
        self.variants.keys().copied()
    }
}
