use std::fmt::Write;

use crate::nodes::{FieldNode, NodeKind};
use crate::tree::{NodeId, QueryTree};

/// Renders a subtree as an indented, XML-like debug dump.
pub struct TreePrinter<'t> {
    tree: &'t QueryTree,
    ids: bool,
}

type Attrs = Vec<(&'static str, String)>;

impl<'t> TreePrinter<'t> {
    pub fn new(tree: &'t QueryTree) -> Self {
        Self { tree, ids: false }
    }

    /// Prefix each element with its node id.
    pub fn with_ids(mut self, value: bool) -> Self {
        self.ids = value;
        self
    }

    pub fn dump(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.format(id, &mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, id: NodeId, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(id, 0, w)
    }

    fn format_node(&self, id: NodeId, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let (name, attrs) = element(self.tree.kind(id));

        write!(w, "{prefix}")?;
        if self.ids {
            write!(w, "{id} ")?;
        }
        write!(w, "<{name}")?;
        for (key, value) in &attrs {
            write!(w, " {key}='{value}'")?;
        }

        let children = self.tree.children(id);
        if children.is_empty() {
            return writeln!(w, "/>");
        }
        writeln!(w, ">")?;
        for &child in children {
            self.format_node(child, indent + 1, w)?;
        }
        writeln!(w, "{prefix}</{name}>")
    }
}

fn element(kind: &NodeKind) -> (&'static str, Attrs) {
    match kind {
        NodeKind::Field(term) => ("field", term_attrs(term)),
        NodeKind::QuotedField(term) => ("quotedfield", term_attrs(term)),
        NodeKind::Fuzzy(fuzzy) => {
            let mut attrs = Attrs::new();
            if let Some(field) = &fuzzy.term.field {
                attrs.push(("field", field.clone()));
            }
            attrs.push(("similarity", fuzzy.similarity().to_string()));
            attrs.push(("term", fuzzy.term.text.clone()));
            ("fuzzy", attrs)
        }
        NodeKind::MatchAll => (
            "matchalldocs",
            vec![("field", "*".to_owned()), ("term", "*".to_owned())],
        ),
        NodeKind::MatchNone => ("matchnodocs", Attrs::new()),
        NodeKind::Boolean => ("boolean", vec![("operation", "default".to_owned())]),
        NodeKind::And => ("boolean", vec![("operation", "and".to_owned())]),
        NodeKind::Or => ("boolean", vec![("operation", "or".to_owned())]),
        NodeKind::Group => ("group", Attrs::new()),
        NodeKind::Modifier(m) => ("modifier", vec![("operation", m.as_str().to_owned())]),
        NodeKind::Boost(value) => ("boost", vec![("value", value.to_string())]),
        NodeKind::Slop(value) => ("slop", vec![("value", value.to_string())]),
        NodeKind::TokenizedPhrase => ("tokenizedphrase", Attrs::new()),
        NodeKind::MultiPhrase => ("multiphrase", Attrs::new()),
        NodeKind::Proximity(p) => {
            let mut attrs = Attrs::new();
            if let Some(field) = p.field() {
                attrs.push(("field", field.to_owned()));
            }
            attrs.push(("inorder", p.in_order().to_string()));
            attrs.push(("type", p.proximity_type().as_str().to_owned()));
            if let Some(distance) = p.distance() {
                attrs.push(("distance", distance.to_string()));
            }
            ("proximity", attrs)
        }
        NodeKind::Extension(ext) => (ext.element(), ext.attributes()),
    }
}

fn term_attrs(term: &FieldNode) -> Attrs {
    let mut attrs = vec![
        ("start", term.begin.to_string()),
        ("end", term.end.to_string()),
    ];
    if let Some(field) = &term.field {
        attrs.push(("field", field.clone()));
    }
    attrs.push(("text", term.text.clone()));
    if term.position_increment != 1 {
        attrs.push(("pos", term.position_increment.to_string()));
    }
    attrs
}
