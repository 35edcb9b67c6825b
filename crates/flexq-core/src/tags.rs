//! Per-node side table.
//!
//! Tags attach values to nodes without living inside the tree: the store
//! is keyed by `(NodeId, TagKey)`, so cloning a tree never copies them
//! and a tree can be tagged by several independent stores at once.

use indexmap::IndexMap;

use crate::tree::NodeId;

/// Opaque tag identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TagKey(&'static str);

impl TagKey {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct TagStore<V> {
    entries: IndexMap<(NodeId, TagKey), V>,
}

impl<V> Default for TagStore<V> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<V> TagStore<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite, returning the previous value.
    pub fn set(&mut self, node: NodeId, key: TagKey, value: V) -> Option<V> {
        self.entries.insert((node, key), value)
    }

    /// `None` means the tag was never set, which is not an error.
    pub fn get(&self, node: NodeId, key: TagKey) -> Option<&V> {
        self.entries.get(&(node, key))
    }

    pub fn remove(&mut self, node: NodeId, key: TagKey) -> Option<V> {
        self.entries.swap_remove(&(node, key))
    }

    pub fn contains(&self, node: NodeId, key: TagKey) -> bool {
        self.entries.contains_key(&(node, key))
    }

    /// All tags set on `node`.
    pub fn tags_of(&self, node: NodeId) -> impl Iterator<Item = (TagKey, &V)> {
        self.entries
            .iter()
            .filter(move |((id, _), _)| *id == node)
            .map(|((_, key), value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
