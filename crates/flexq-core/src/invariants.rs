//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::tree::{Node, NodeId, QueryTree};

impl QueryTree {
    pub(crate) fn ensure_node(&self, id: NodeId) -> &Node {
        let len = self.len();
        self.nodes.get(id.index()).unwrap_or_else(|| {
            panic!("QueryTree: node {id} not found in arena of {len} (id from another tree?)")
        })
    }

    pub(crate) fn ensure_node_mut(&mut self, id: NodeId) -> &mut Node {
        let len = self.len();
        self.nodes.get_mut(id.index()).unwrap_or_else(|| {
            panic!("QueryTree: node {id} not found in arena of {len} (id from another tree?)")
        })
    }

    pub(crate) fn ensure_linked(&self, parent: NodeId, child: NodeId) -> ! {
        panic!("QueryTree: {child} points at parent {parent}, which does not list it as a child")
    }
}
