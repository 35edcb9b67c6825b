//! Round-trip query syntax.
//!
//! The output is meant to be fed back through the grammar, producing a
//! tree that compiles to the same query. Structure may differ (a group
//! can disappear, a field prefix can move), behavior may not.

use std::collections::BTreeMap;

use crate::escape::EscapeQuerySyntax;
use crate::nodes::{FieldNode, Modifier, NodeKind, PLAINTEXT_FIELD};
use crate::proximity::ProximityNode;
use crate::tree::NodeRef;

pub struct QueryStringWriter<'e> {
    escaper: &'e dyn EscapeQuerySyntax,
    default_field: Option<String>,
}

impl<'e> QueryStringWriter<'e> {
    pub fn new(escaper: &'e dyn EscapeQuerySyntax) -> Self {
        Self {
            escaper,
            default_field: None,
        }
    }

    /// Field that is implied by context and never printed as a prefix.
    pub fn default_field(mut self, field: impl Into<String>) -> Self {
        self.default_field = Some(field.into());
        self
    }

    pub fn write(&self, node: NodeRef<'_>) -> String {
        match node.kind() {
            NodeKind::Field(term) => self.term(term, false),
            NodeKind::QuotedField(term) => self.term(term, true),
            NodeKind::Fuzzy(fuzzy) => {
                format!("{}~{}", self.term(&fuzzy.term, false), fuzzy.similarity())
            }
            NodeKind::MatchAll => "*:*".to_owned(),
            NodeKind::MatchNone => String::new(),
            NodeKind::Boolean => self.junction(node, " "),
            NodeKind::And => self.junction(node, " AND "),
            NodeKind::Or => self.junction(node, " OR "),
            NodeKind::Group => match node.child(0) {
                Some(child) => format!("( {} )", self.write(child)),
                None => String::new(),
            },
            NodeKind::Modifier(modifier) => self.modifier(node, *modifier),
            NodeKind::Boost(value) => self.suffixed(node, '^', value),
            NodeKind::Slop(value) => self.suffixed(node, '~', value),
            NodeKind::TokenizedPhrase => {
                let texts = node.children().filter_map(|c| c.kind().as_field());
                self.phrase(node, texts.map(|t| t.text.as_str()))
            }
            NodeKind::MultiPhrase => self.multi_phrase(node),
            NodeKind::Proximity(proximity) => self.proximity(node, proximity),
            NodeKind::Extension(ext) => {
                let children: Vec<String> = node.children().map(|c| self.write(c)).collect();
                ext.to_query_string(&children, self.escaper)
            }
        }
    }

    fn is_default_field(&self, field: Option<&str>) -> bool {
        match field {
            None => true,
            Some(PLAINTEXT_FIELD) => true,
            Some(field) => self.default_field.as_deref() == Some(field),
        }
    }

    fn prefix_field(&self, field: Option<&str>, body: String) -> String {
        match field {
            Some(field) if !self.is_default_field(Some(field)) => {
                format!("{}:{body}", self.escaper.escape(field))
            }
            _ => body,
        }
    }

    fn term(&self, term: &FieldNode, quoted: bool) -> String {
        let text = if quoted {
            format!("\"{}\"", self.escaper.escape_quoted(&term.text))
        } else {
            self.escaper.escape(&term.text).into_owned()
        };
        if term.ignore_field {
            return text;
        }
        self.prefix_field(term.field.as_deref(), text)
    }

    fn junction(&self, node: NodeRef<'_>, operator: &str) -> String {
        let clauses: Vec<String> = node
            .children()
            .map(|c| self.write(c))
            .filter(|s| !s.is_empty())
            .collect();
        if clauses.is_empty() {
            return String::new();
        }

        let joined = clauses.join(operator);
        let in_group = node
            .parent()
            .is_some_and(|p| matches!(p.kind(), NodeKind::Group));
        if node.is_root() || in_group {
            joined
        } else {
            format!("( {joined} )")
        }
    }

    fn modifier(&self, node: NodeRef<'_>, modifier: Modifier) -> String {
        let Some(child) = node.child(0) else {
            return String::new();
        };
        let inner = self.write(child);
        match child.kind() {
            kind if kind.is_junction() => format!("{}{inner}", modifier.keyword()),
            NodeKind::Modifier(_) => format!("{}({inner})", modifier.symbol()),
            _ => format!("{}{inner}", modifier.symbol()),
        }
    }

    fn suffixed(&self, node: NodeRef<'_>, marker: char, value: &impl std::fmt::Display) -> String {
        match node.child(0) {
            Some(child) => format!("{}{marker}{value}", self.write(child)),
            None => String::new(),
        }
    }

    fn phrase<'a>(&self, node: NodeRef<'_>, texts: impl Iterator<Item = &'a str>) -> String {
        let words: Vec<&str> = texts.collect();
        if words.is_empty() {
            return String::new();
        }
        let body = format!("\"{}\"", self.escaper.escape_quoted(&words.join(" ")));
        self.phrase_field(node, body)
    }

    /// `{quick|brown ? fox}`: every alternative of a position joined by `|`,
    /// one `?` per skipped position, positions counted from 1.
    fn multi_phrase(&self, node: NodeRef<'_>) -> String {
        let mut buckets: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
        for term in node.children().filter_map(|c| c.kind().as_field()) {
            buckets
                .entry(term.position_increment)
                .or_default()
                .push(&term.text);
        }
        let Some(&first) = buckets.keys().next() else {
            return String::new();
        };

        let mut slots = vec!["?".to_owned(); first.saturating_sub(1) as usize];
        let mut next = first;
        for (&position, texts) in &buckets {
            slots.extend((next..position).map(|_| "?".to_owned()));
            let alternatives: Vec<_> = texts.iter().map(|t| self.escaper.escape(t)).collect();
            slots.push(alternatives.join("|"));
            next = position + 1;
        }
        self.phrase_field(node, format!("{{{}}}", slots.join(" ")))
    }

    /// Prefix a phrase body with the field of its first term.
    fn phrase_field(&self, node: NodeRef<'_>, body: String) -> String {
        let first = node.children().find_map(|c| c.kind().as_field());
        match first {
            Some(term) if !term.ignore_field => self.prefix_field(term.field.as_deref(), body),
            _ => body,
        }
    }

    fn proximity(&self, node: NodeRef<'_>, proximity: &ProximityNode) -> String {
        let body: Vec<String> = node.children().map(|c| self.write(c)).collect();

        let mut within = proximity.proximity_type().keyword().to_owned();
        if let Some(distance) = proximity.distance() {
            within.push_str(&format!(" {distance}"));
        }
        if proximity.in_order() {
            within.push_str(" INORDER");
        }

        let group = format!("( {} ) {within}", body.join(" "));
        match proximity.field() {
            Some(field) if !self.is_default_field(Some(field)) => {
                format!("{}:({group})", self.escaper.escape(field))
            }
            _ => group,
        }
    }
}
