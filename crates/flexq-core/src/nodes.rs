//! Node variants.
//!
//! [`NodeKind`] is the closed set of built-in variants plus an
//! [`NodeKind::Extension`] arm for variants defined outside this crate.
//! Every variant reports a [`Variant`] identifier, which the compiler uses
//! as its dispatch key, and an ordered fallback chain that mirrors the
//! "is-a" relations between variants (a proximity node is a boolean node,
//! a quoted field is a field).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::extension::ExtensionNode;
use crate::proximity::ProximityNode;
use crate::{Error, Result};

/// Field name that serializes like an absent field.
pub const PLAINTEXT_FIELD: &str = "_plain";

/// Identifier of a node variant.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Variant(&'static str);

impl Variant {
    pub const FIELD: Variant = Variant("field");
    pub const QUOTED_FIELD: Variant = Variant("quoted_field");
    pub const FUZZY: Variant = Variant("fuzzy");
    pub const MATCH_ALL: Variant = Variant("match_all");
    pub const MATCH_NONE: Variant = Variant("match_none");
    pub const BOOLEAN: Variant = Variant("boolean");
    pub const AND: Variant = Variant("and");
    pub const OR: Variant = Variant("or");
    pub const GROUP: Variant = Variant("group");
    pub const MODIFIER: Variant = Variant("modifier");
    pub const BOOST: Variant = Variant("boost");
    pub const SLOP: Variant = Variant("slop");
    pub const TOKENIZED_PHRASE: Variant = Variant("tokenized_phrase");
    pub const MULTI_PHRASE: Variant = Variant("multi_phrase");
    pub const PROXIMITY: Variant = Variant("proximity");

    /// Identifier for a variant defined outside this crate.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// How many children a variant accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Leaf,
    One,
    Many,
}

/// A term bound to a field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldNode {
    /// `None` means the default field, resolved by whoever consumes the node.
    pub field: Option<String>,
    pub text: String,
    /// Start offset in the original query text.
    pub begin: usize,
    /// End offset in the original query text.
    pub end: usize,
    pub position_increment: u32,
    /// Set when an ancestor prints the field once for all its descendants.
    pub ignore_field: bool,
}

impl FieldNode {
    pub fn new(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Self::unscoped(text)
        }
    }

    /// A term without an explicit field.
    pub fn unscoped(text: impl Into<String>) -> Self {
        Self {
            field: None,
            text: text.into(),
            begin: 0,
            end: 0,
            position_increment: 1,
            ignore_field: false,
        }
    }

    pub fn with_span(mut self, begin: usize, end: usize) -> Self {
        self.begin = begin;
        self.end = end;
        self
    }

    pub fn with_position_increment(mut self, value: u32) -> Self {
        self.position_increment = value;
        self
    }
}

/// A term matched within an edit distance.
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzyNode {
    pub term: FieldNode,
    similarity: f32,
    pub prefix_length: u32,
}

impl FuzzyNode {
    /// Similarity is either a ratio in `[0, 1)` or a whole number of edits.
    pub fn new(term: FieldNode, similarity: f32, prefix_length: u32) -> Result<Self> {
        let is_edit_count = similarity >= 1.0 && similarity.fract() == 0.0;
        if !(0.0..1.0).contains(&similarity) && !is_edit_count {
            return Err(Error::invalid_parameter("similarity", similarity));
        }
        Ok(Self {
            term,
            similarity,
            prefix_length,
        })
    }

    pub fn similarity(&self) -> f32 {
        self.similarity
    }
}

/// Clause requirement attached by a modifier node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    #[default]
    None,
    Not,
    Req,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "MOD_NONE",
            Self::Not => "MOD_NOT",
            Self::Req => "MOD_REQ",
        }
    }

    /// Prefix used before a single term or nested expression.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Not => "-",
            Self::Req => "+",
        }
    }

    /// Prefix used before a parenthesised boolean group.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Not => "NOT ",
            Self::Req => "+",
        }
    }
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Field(FieldNode),
    QuotedField(FieldNode),
    Fuzzy(FuzzyNode),
    MatchAll,
    MatchNone,
    /// Clauses combined by the default operator.
    Boolean,
    And,
    Or,
    Group,
    Modifier(Modifier),
    Boost(f32),
    Slop(u32),
    /// Ordered field leaves forming one phrase.
    TokenizedPhrase,
    /// Field leaves grouped into position buckets by position increment.
    MultiPhrase,
    Proximity(ProximityNode),
    Extension(Box<dyn ExtensionNode>),
}

impl NodeKind {
    pub fn variant(&self) -> Variant {
        match self {
            Self::Field(_) => Variant::FIELD,
            Self::QuotedField(_) => Variant::QUOTED_FIELD,
            Self::Fuzzy(_) => Variant::FUZZY,
            Self::MatchAll => Variant::MATCH_ALL,
            Self::MatchNone => Variant::MATCH_NONE,
            Self::Boolean => Variant::BOOLEAN,
            Self::And => Variant::AND,
            Self::Or => Variant::OR,
            Self::Group => Variant::GROUP,
            Self::Modifier(_) => Variant::MODIFIER,
            Self::Boost(_) => Variant::BOOST,
            Self::Slop(_) => Variant::SLOP,
            Self::TokenizedPhrase => Variant::TOKENIZED_PHRASE,
            Self::MultiPhrase => Variant::MULTI_PHRASE,
            Self::Proximity(_) => Variant::PROXIMITY,
            Self::Extension(ext) => ext.variant(),
        }
    }

    /// More general variants this one can be handled as, nearest first.
    pub fn fallbacks(&self) -> &'static [Variant] {
        match self {
            Self::QuotedField(_) | Self::Fuzzy(_) => &[Variant::FIELD],
            Self::And | Self::Or | Self::Proximity(_) => &[Variant::BOOLEAN],
            Self::Extension(ext) => ext.fallbacks(),
            _ => &[],
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Self::Field(_)
            | Self::QuotedField(_)
            | Self::Fuzzy(_)
            | Self::MatchAll
            | Self::MatchNone => Arity::Leaf,
            Self::Group | Self::Modifier(_) | Self::Boost(_) | Self::Slop(_) => Arity::One,
            Self::Boolean
            | Self::And
            | Self::Or
            | Self::TokenizedPhrase
            | Self::MultiPhrase
            | Self::Proximity(_) => Arity::Many,
            Self::Extension(ext) => ext.arity(),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.arity() == Arity::Leaf
    }

    /// Boolean-like composites: clauses joined by an operator.
    pub fn is_junction(&self) -> bool {
        matches!(
            self,
            Self::Boolean | Self::And | Self::Or | Self::Proximity(_)
        )
    }

    /// Field of a fieldable node, if it has one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Proximity(p) => p.field(),
            _ => self.as_field().and_then(|t| t.field.as_deref()),
        }
    }

    /// The term of a fieldable leaf.
    pub fn as_field(&self) -> Option<&FieldNode> {
        match self {
            Self::Field(t) | Self::QuotedField(t) => Some(t),
            Self::Fuzzy(f) => Some(&f.term),
            _ => None,
        }
    }

    pub fn as_field_mut(&mut self) -> Option<&mut FieldNode> {
        match self {
            Self::Field(t) | Self::QuotedField(t) => Some(t),
            Self::Fuzzy(f) => Some(&mut f.term),
            _ => None,
        }
    }
}

impl From<FieldNode> for NodeKind {
    fn from(term: FieldNode) -> Self {
        Self::Field(term)
    }
}

impl From<FuzzyNode> for NodeKind {
    fn from(fuzzy: FuzzyNode) -> Self {
        Self::Fuzzy(fuzzy)
    }
}

impl From<ProximityNode> for NodeKind {
    fn from(node: ProximityNode) -> Self {
        Self::Proximity(node)
    }
}

impl From<Modifier> for NodeKind {
    fn from(modifier: Modifier) -> Self {
        Self::Modifier(modifier)
    }
}

impl<E: ExtensionNode + 'static> From<Box<E>> for NodeKind {
    fn from(ext: Box<E>) -> Self {
        Self::Extension(ext)
    }
}
