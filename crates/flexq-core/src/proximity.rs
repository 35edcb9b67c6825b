//! Distance- and order-constrained clause groups.
//!
//! A proximity node prints its field once for the whole group, so its
//! fieldable leaf children are rebound to that field and told to omit it
//! when serialized. The rebinding is an explicit normalization step,
//! [`QueryTree::propagate_field`], which [`QueryTree::add_proximity`] runs
//! right after attaching the children. Later tree mutations that attach a
//! leaf to a proximity node bind it the same way.

use serde::{Deserialize, Serialize};

use crate::nodes::NodeKind;
use crate::tree::{NodeId, QueryTree};
use crate::{Error, Result};

/// Distance value meaning "not applicable".
pub const NO_DISTANCE: i32 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProximityType {
    Paragraph,
    Sentence,
    Number,
}

impl ProximityType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paragraph => "PARAGRAPH",
            Self::Sentence => "SENTENCE",
            Self::Number => "NUMBER",
        }
    }

    /// Keyword phrase in query syntax.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Paragraph => "WITHIN PARAGRAPH",
            Self::Sentence => "WITHIN SENTENCE",
            Self::Number => "WITHIN",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProximityNode {
    field: Option<String>,
    proximity_type: ProximityType,
    distance: Option<u32>,
    in_order: bool,
}

impl ProximityNode {
    /// `distance` is only read for [`ProximityType::Number`], where it must be positive.
    pub fn new(proximity_type: ProximityType, distance: i32, in_order: bool) -> Result<Self> {
        let distance = match proximity_type {
            ProximityType::Number if distance <= 0 => {
                return Err(Error::invalid_parameter("distance", distance));
            }
            ProximityType::Number => Some(distance as u32),
            ProximityType::Paragraph | ProximityType::Sentence => None,
        };
        Ok(Self {
            field: None,
            proximity_type,
            distance,
            in_order,
        })
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn proximity_type(&self) -> ProximityType {
        self.proximity_type
    }

    /// `None` unless the type is [`ProximityType::Number`].
    pub fn distance(&self) -> Option<u32> {
        self.distance
    }

    pub fn in_order(&self) -> bool {
        self.in_order
    }
}

impl QueryTree {
    /// Add a proximity node over `children` and bind their fields to it.
    pub fn add_proximity(
        &mut self,
        node: ProximityNode,
        children: impl IntoIterator<Item = NodeId>,
    ) -> Result<NodeId> {
        let id = self.add_with_children(node, children)?;
        self.propagate_field(id);
        Ok(id)
    }

    /// Rebind every fieldable leaf child of proximity node `id` to its field.
    ///
    /// Only immediate children are touched; nested composites keep their
    /// own fields. No-op for other variants.
    pub fn propagate_field(&mut self, id: NodeId) {
        if !matches!(self.kind(id), NodeKind::Proximity(_)) {
            return;
        }
        for child in self.children(id).to_vec() {
            self.inherit_field(id, child);
        }
    }

    /// Bind `child` to the field of `parent` when `parent` is a proximity node.
    ///
    /// Runs whenever a node is attached, so rewrites that move a leaf under
    /// a proximity node keep it bound.
    pub(crate) fn inherit_field(&mut self, parent: NodeId, child: NodeId) {
        let NodeKind::Proximity(proximity) = self.kind(parent) else {
            return;
        };
        let field = proximity.field.clone();
        if let Some(term) = self.field_mut(child) {
            term.field = field;
            term.ignore_field = true;
        }
    }
}
