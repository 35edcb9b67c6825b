//! JSON interchange with the grammar.
//!
//! The grammar that produces query trees lives outside this crate, so
//! trees cross the boundary as nested JSON objects tagged by `"type"`.
//! Loading goes through the same constructors as hand-built trees, which
//! means proximity and fuzzy validation and proximity field propagation
//! all run on load.

use serde::{Deserialize, Serialize};

use crate::nodes::{FieldNode, FuzzyNode, Modifier, NodeKind};
use crate::proximity::{NO_DISTANCE, ProximityNode, ProximityType};
use crate::tree::{NodeId, QueryTree};
use crate::{Error, Result};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid tree JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tree: {0}")]
    Node(#[from] Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTerm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub text: String,
    #[serde(default)]
    pub begin: usize,
    #[serde(default)]
    pub end: usize,
    #[serde(default = "default_position_increment")]
    pub position_increment: u32,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub ignore_field: bool,
}

fn default_position_increment() -> u32 {
    1
}

fn default_distance() -> i32 {
    NO_DISTANCE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawNode {
    Field(RawTerm),
    QuotedField(RawTerm),
    Fuzzy {
        term: RawTerm,
        similarity: f32,
        #[serde(default)]
        prefix_length: u32,
    },
    MatchAll,
    MatchNone,
    Boolean {
        #[serde(default)]
        children: Vec<RawNode>,
    },
    And {
        #[serde(default)]
        children: Vec<RawNode>,
    },
    Or {
        #[serde(default)]
        children: Vec<RawNode>,
    },
    Group {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        child: Option<Box<RawNode>>,
    },
    Modifier {
        modifier: Modifier,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        child: Option<Box<RawNode>>,
    },
    Boost {
        value: f32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        child: Option<Box<RawNode>>,
    },
    Slop {
        value: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        child: Option<Box<RawNode>>,
    },
    TokenizedPhrase {
        #[serde(default)]
        children: Vec<RawNode>,
    },
    MultiPhrase {
        #[serde(default)]
        children: Vec<RawNode>,
    },
    Proximity {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        field: Option<String>,
        proximity_type: ProximityType,
        #[serde(default = "default_distance")]
        distance: i32,
        #[serde(default)]
        in_order: bool,
        #[serde(default)]
        children: Vec<RawNode>,
    },
}

/// Parse a JSON-encoded tree. The top-level node becomes the root.
pub fn parse_tree(json: &str) -> std::result::Result<QueryTree, LoadError> {
    let raw: RawNode = serde_json::from_str(json)?;
    Ok(QueryTree::from_raw(&raw)?)
}

impl From<&RawTerm> for FieldNode {
    fn from(raw: &RawTerm) -> Self {
        Self {
            field: raw.field.clone(),
            text: raw.text.clone(),
            begin: raw.begin,
            end: raw.end,
            position_increment: raw.position_increment,
            ignore_field: raw.ignore_field,
        }
    }
}

impl From<&FieldNode> for RawTerm {
    fn from(term: &FieldNode) -> Self {
        Self {
            field: term.field.clone(),
            text: term.text.clone(),
            begin: term.begin,
            end: term.end,
            position_increment: term.position_increment,
            ignore_field: term.ignore_field,
        }
    }
}

impl QueryTree {
    pub fn from_raw(raw: &RawNode) -> Result<QueryTree> {
        let mut tree = QueryTree::new();
        let root = tree.add_raw(raw)?;
        tree.set_root(root);
        Ok(tree)
    }

    /// Serialize the subtree at `id`. Extension nodes have no JSON form.
    pub fn to_raw(&self, id: NodeId) -> Result<RawNode> {
        let children = || -> Result<Vec<RawNode>> {
            self.children(id).iter().map(|&c| self.to_raw(c)).collect()
        };
        let child = || -> Result<Option<Box<RawNode>>> {
            match self.children(id).first() {
                Some(&c) => Ok(Some(Box::new(self.to_raw(c)?))),
                None => Ok(None),
            }
        };

        let raw = match self.kind(id) {
            NodeKind::Field(term) => RawNode::Field(term.into()),
            NodeKind::QuotedField(term) => RawNode::QuotedField(term.into()),
            NodeKind::Fuzzy(fuzzy) => RawNode::Fuzzy {
                term: (&fuzzy.term).into(),
                similarity: fuzzy.similarity(),
                prefix_length: fuzzy.prefix_length,
            },
            NodeKind::MatchAll => RawNode::MatchAll,
            NodeKind::MatchNone => RawNode::MatchNone,
            NodeKind::Boolean => RawNode::Boolean {
                children: children()?,
            },
            NodeKind::And => RawNode::And {
                children: children()?,
            },
            NodeKind::Or => RawNode::Or {
                children: children()?,
            },
            NodeKind::Group => RawNode::Group { child: child()? },
            NodeKind::Modifier(modifier) => RawNode::Modifier {
                modifier: *modifier,
                child: child()?,
            },
            NodeKind::Boost(value) => RawNode::Boost {
                value: *value,
                child: child()?,
            },
            NodeKind::Slop(value) => RawNode::Slop {
                value: *value,
                child: child()?,
            },
            NodeKind::TokenizedPhrase => RawNode::TokenizedPhrase {
                children: children()?,
            },
            NodeKind::MultiPhrase => RawNode::MultiPhrase {
                children: children()?,
            },
            NodeKind::Proximity(p) => RawNode::Proximity {
                field: p.field().map(str::to_owned),
                proximity_type: p.proximity_type(),
                distance: p.distance().map_or(NO_DISTANCE, |d| d as i32),
                in_order: p.in_order(),
                children: children()?,
            },
            NodeKind::Extension(ext) => {
                return Err(Error::action_not_supported(ext.variant(), "serialize to JSON"));
            }
        };
        Ok(raw)
    }

    fn add_raw(&mut self, raw: &RawNode) -> Result<NodeId> {
        let id = match raw {
            RawNode::Field(term) => self.add(FieldNode::from(term)),
            RawNode::QuotedField(term) => self.add(NodeKind::QuotedField(term.into())),
            RawNode::Fuzzy {
                term,
                similarity,
                prefix_length,
            } => self.add(FuzzyNode::new(term.into(), *similarity, *prefix_length)?),
            RawNode::MatchAll => self.add(NodeKind::MatchAll),
            RawNode::MatchNone => self.add(NodeKind::MatchNone),
            RawNode::Boolean { children } => self.add_raw_parent(NodeKind::Boolean, children)?,
            RawNode::And { children } => self.add_raw_parent(NodeKind::And, children)?,
            RawNode::Or { children } => self.add_raw_parent(NodeKind::Or, children)?,
            RawNode::Group { child } => self.add_raw_parent(NodeKind::Group, child.as_deref())?,
            RawNode::Modifier { modifier, child } => {
                self.add_raw_parent(NodeKind::Modifier(*modifier), child.as_deref())?
            }
            RawNode::Boost { value, child } => {
                self.add_raw_parent(NodeKind::Boost(*value), child.as_deref())?
            }
            RawNode::Slop { value, child } => {
                self.add_raw_parent(NodeKind::Slop(*value), child.as_deref())?
            }
            RawNode::TokenizedPhrase { children } => {
                self.add_raw_parent(NodeKind::TokenizedPhrase, children)?
            }
            RawNode::MultiPhrase { children } => {
                self.add_raw_parent(NodeKind::MultiPhrase, children)?
            }
            RawNode::Proximity {
                field,
                proximity_type,
                distance,
                in_order,
                children,
            } => {
                let mut node = ProximityNode::new(*proximity_type, *distance, *in_order)?;
                if let Some(field) = field {
                    node = node.with_field(field.clone());
                }
                let ids = self.add_raw_all(children)?;
                self.add_proximity(node, ids)?
            }
        };
        Ok(id)
    }

    fn add_raw_parent<'r>(
        &mut self,
        kind: NodeKind,
        children: impl IntoIterator<Item = &'r RawNode>,
    ) -> Result<NodeId> {
        let ids = self.add_raw_all(children)?;
        self.add_with_children(kind, ids)
    }

    fn add_raw_all<'r>(
        &mut self,
        children: impl IntoIterator<Item = &'r RawNode>,
    ) -> Result<Vec<NodeId>> {
        children.into_iter().map(|c| self.add_raw(c)).collect()
    }
}
