//! Arena-backed query tree.
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`].
//! A node exclusively owns its ordered children; the parent link is a
//! plain back-reference. Detached nodes stay in the arena until the tree
//! is dropped, so ids never dangle.

use std::fmt;

use crate::escape::EscapeQuerySyntax;
use crate::nodes::{Arity, FieldNode, NodeKind, Variant};
use crate::printer::TreePrinter;
use crate::query_string::QueryStringWriter;
use crate::{Error, Result};

/// Index of a node inside its [`QueryTree`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        Self(index as u32)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// True iff the variant never carries children.
    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryTree {
    pub(crate) nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl QueryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the arena, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a detached node.
    pub fn add(&mut self, kind: impl Into<NodeKind>) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node {
            kind: kind.into(),
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Add a node and attach `children` to it in order.
    pub fn add_with_children(
        &mut self,
        kind: impl Into<NodeKind>,
        children: impl IntoIterator<Item = NodeId>,
    ) -> Result<NodeId> {
        let id = self.add(kind);
        self.set_children(id, children.into_iter().collect())?;
        Ok(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Make `id` the root, detaching it from any parent.
    pub fn set_root(&mut self, id: NodeId) {
        self.remove_from_parent(id);
        self.root = Some(id);
    }

    pub fn get(&self, id: NodeId) -> NodeRef<'_> {
        self.ensure_node(id);
        NodeRef { tree: self, id }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.ensure_node(id)
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.ensure_node(id).kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.ensure_node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.ensure_node(id).children
    }

    /// Mutable access to the term of a fieldable leaf.
    pub fn field_mut(&mut self, id: NodeId) -> Option<&mut FieldNode> {
        self.ensure_node_mut(id).kind.as_field_mut()
    }

    /// Append `child` to `parent`, moving it away from its previous parent.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let variant = self.kind(parent).variant();
        match self.kind(parent).arity() {
            Arity::Leaf => return Err(Error::action_not_supported(variant, "add child")),
            Arity::One if !self.children(parent).is_empty() => {
                return Err(Error::action_not_supported(variant, "add a second child"));
            }
            _ => {}
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(Error::action_not_supported(variant, "adopt its own ancestor"));
        }

        self.attach(parent, child);
        Ok(())
    }

    /// Replace all children of `parent`. Old children become detached.
    pub fn set_children(&mut self, parent: NodeId, children: Vec<NodeId>) -> Result<()> {
        let variant = self.kind(parent).variant();
        match self.kind(parent).arity() {
            Arity::Leaf if !children.is_empty() => {
                return Err(Error::action_not_supported(variant, "add child"));
            }
            Arity::One if children.len() > 1 => {
                return Err(Error::action_not_supported(variant, "add a second child"));
            }
            _ => {}
        }
        for (i, &child) in children.iter().enumerate() {
            if self.is_ancestor_or_self(child, parent) {
                return Err(Error::action_not_supported(variant, "adopt its own ancestor"));
            }
            if children[..i].contains(&child) {
                return Err(Error::action_not_supported(variant, "adopt a child twice"));
            }
        }

        for old in std::mem::take(&mut self.ensure_node_mut(parent).children) {
            self.ensure_node_mut(old).parent = None;
        }
        for child in children {
            self.attach(parent, child);
        }
        Ok(())
    }

    /// Detach `id` from its parent. No-op for detached nodes.
    pub fn remove_from_parent(&mut self, id: NodeId) {
        let Some(parent) = self.ensure_node_mut(id).parent.take() else {
            return;
        };
        self.ensure_node_mut(parent).children.retain(|&c| c != id);
    }

    /// Put `new` into the slot `old` occupies, detaching `old`.
    ///
    /// `old` must have a parent or be the root; any other detached node has
    /// no slot to fill.
    pub fn replace(&mut self, old: NodeId, new: NodeId) -> Result<()> {
        if old == new {
            return Ok(());
        }
        let Some(parent) = self.parent(old) else {
            if self.root != Some(old) {
                let variant = self.kind(old).variant();
                return Err(Error::action_not_supported(variant, "be replaced while detached"));
            }
            self.set_root(new);
            return Ok(());
        };
        if self.is_ancestor_or_self(new, parent) {
            let variant = self.kind(parent).variant();
            return Err(Error::action_not_supported(variant, "adopt its own ancestor"));
        }

        self.remove_from_parent(new);
        let slot = self
            .children(parent)
            .iter()
            .position(|&c| c == old)
            .unwrap_or_else(|| self.ensure_linked(parent, old));
        self.ensure_node_mut(parent).children[slot] = new;
        self.ensure_node_mut(new).parent = Some(parent);
        self.ensure_node_mut(old).parent = None;
        self.inherit_field(parent, new);
        Ok(())
    }

    /// Deep copy of the subtree at `id` into a fresh, compacted tree.
    ///
    /// The copy becomes the new tree's root and shares no storage with `self`.
    pub fn clone_tree(&self, id: NodeId) -> QueryTree {
        let mut out = QueryTree::new();
        let root = out.copy_from(self, id, None);
        out.root = Some(root);
        out
    }

    /// Deep copy of the subtree at `id` inside this arena, returned detached.
    pub fn clone_subtree(&mut self, id: NodeId) -> NodeId {
        let copy = self.clone_tree(id);
        self.graft(copy)
            .unwrap_or_else(|| unreachable!("clone_tree always sets a root"))
    }

    /// Move all nodes of `other` into this arena.
    ///
    /// Returns the id of `other`'s root, now a detached node here.
    pub fn graft(&mut self, other: QueryTree) -> Option<NodeId> {
        let offset = self.nodes.len();
        let shift = |id: NodeId| NodeId::from_index(id.index() + offset);
        self.nodes.extend(other.nodes.into_iter().map(|node| Node {
            kind: node.kind,
            parent: node.parent.map(shift),
            children: node.children.into_iter().map(shift).collect(),
        }));
        let root = other.root.map(shift)?;
        self.ensure_node_mut(root).parent = None;
        Some(root)
    }

    /// Nodes of the subtree at `id`, children before parents.
    pub fn post_order(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![(id, false)];
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                out.push(node);
                continue;
            }
            stack.push((node, true));
            for &child in self.children(node).iter().rev() {
                stack.push((child, false));
            }
        }
        out
    }

    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.remove_from_parent(child);
        if self.root == Some(child) {
            self.root = None;
        }
        self.ensure_node_mut(child).parent = Some(parent);
        self.ensure_node_mut(parent).children.push(child);
        self.inherit_field(parent, child);
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, mut id: NodeId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.parent(id) {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    fn copy_from(&mut self, src: &QueryTree, id: NodeId, parent: Option<NodeId>) -> NodeId {
        let node = src.node(id);
        let copy = self.add(node.kind.clone());
        self.ensure_node_mut(copy).parent = parent;
        for &child in &node.children {
            let child_copy = self.copy_from(src, child, Some(copy));
            self.ensure_node_mut(copy).children.push(child_copy);
        }
        copy
    }
}

/// Borrowed view of one node and its surroundings.
#[derive(Clone, Copy)]
pub struct NodeRef<'t> {
    tree: &'t QueryTree,
    id: NodeId,
}

impl<'t> NodeRef<'t> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'t QueryTree {
        self.tree
    }

    pub fn kind(&self) -> &'t NodeKind {
        self.tree.kind(self.id)
    }

    pub fn variant(&self) -> Variant {
        self.kind().variant()
    }

    pub fn is_leaf(&self) -> bool {
        self.kind().is_leaf()
    }

    /// A node without a parent is the root of its own subtree.
    pub fn is_root(&self) -> bool {
        self.tree.parent(self.id).is_none()
    }

    pub fn parent(&self) -> Option<NodeRef<'t>> {
        self.tree.parent(self.id).map(|id| self.tree.get(id))
    }

    pub fn child_count(&self) -> usize {
        self.tree.children(self.id).len()
    }

    pub fn child(&self, index: usize) -> Option<NodeRef<'t>> {
        let tree = self.tree;
        tree.children(self.id).get(index).map(|&id| tree.get(id))
    }

    pub fn children(&self) -> impl ExactSizeIterator<Item = NodeRef<'t>> + use<'t> {
        let tree = self.tree;
        tree.children(self.id).iter().map(move |&id| tree.get(id))
    }

    /// Query syntax for this subtree, with no contextual default field.
    pub fn to_query_string(&self, escaper: &dyn EscapeQuerySyntax) -> String {
        QueryStringWriter::new(escaper).write(*self)
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRef({} {})", self.id, self.variant())
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TreePrinter::new(self.tree).format(self.id, f)
    }
}
