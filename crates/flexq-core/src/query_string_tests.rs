use crate::nodes_tests::RegexpNode;
use crate::{
    FieldNode, FuzzyNode, Modifier, NO_DISTANCE, NodeId, NodeKind, PLAINTEXT_FIELD, ProximityNode,
    ProximityType, QueryStringWriter, QueryTree, StandardEscaper, Verbatim,
};

fn write(tree: &QueryTree, id: NodeId) -> String {
    tree.get(id).to_query_string(&StandardEscaper)
}

#[test]
fn proximity_with_field_and_order() {
    let mut tree = QueryTree::new();
    let quick = tree.add(FieldNode::new("title", "quick"));
    let fox = tree.add(FieldNode::new("title", "fox"));
    let node = ProximityNode::new(ProximityType::Number, 5, true)
        .unwrap()
        .with_field("title");
    let prox = tree.add_proximity(node, [quick, fox]).unwrap();

    assert_eq!(write(&tree, prox), "title:(( quick fox ) WITHIN 5 INORDER)");
}

#[test]
fn proximity_in_default_field_omits_prefix() {
    let mut tree = QueryTree::new();
    let a = tree.add(FieldNode::new("body", "a"));
    let b = tree.add(FieldNode::new("body", "b"));
    let node = ProximityNode::new(ProximityType::Sentence, NO_DISTANCE, false)
        .unwrap()
        .with_field("body");
    let prox = tree.add_proximity(node, [a, b]).unwrap();

    let res = QueryStringWriter::new(&StandardEscaper)
        .default_field("body")
        .write(tree.get(prox));

    assert_eq!(res, "( a b ) WITHIN SENTENCE");
}

#[test]
fn proximity_in_placeholder_field() {
    let mut tree = QueryTree::new();
    let a = tree.add(FieldNode::unscoped("a"));
    let node = ProximityNode::new(ProximityType::Paragraph, NO_DISTANCE, false)
        .unwrap()
        .with_field(PLAINTEXT_FIELD);
    let prox = tree.add_proximity(node, [a]).unwrap();

    assert_eq!(write(&tree, prox), "( a ) WITHIN PARAGRAPH");
}

#[test]
fn boolean_with_modifiers() {
    let mut tree = QueryTree::new();
    let quick = tree.add(FieldNode::new("title", "quick"));
    let fox = tree.add(FieldNode::unscoped("fox"));
    let req = tree.add_with_children(Modifier::Req, [fox]).unwrap();
    let a = tree.add(FieldNode::unscoped("a"));
    let b = tree.add(FieldNode::unscoped("b"));
    let or = tree.add_with_children(NodeKind::Or, [a, b]).unwrap();
    let not = tree.add_with_children(Modifier::Not, [or]).unwrap();
    let root = tree
        .add_with_children(NodeKind::Boolean, [quick, req, not])
        .unwrap();

    insta::assert_snapshot!(write(&tree, root), @"title:quick +fox NOT ( a OR b )");
}

#[test]
fn group_removes_inner_parentheses() {
    let mut tree = QueryTree::new();
    let a = tree.add(FieldNode::unscoped("a"));
    let b = tree.add(FieldNode::unscoped("b"));
    let and = tree.add_with_children(NodeKind::And, [a, b]).unwrap();
    let group = tree.add_with_children(NodeKind::Group, [and]).unwrap();
    let c = tree.add(FieldNode::unscoped("c"));
    let root = tree.add_with_children(NodeKind::Or, [group, c]).unwrap();

    insta::assert_snapshot!(write(&tree, root), @"( a AND b ) OR c");
}

#[test]
fn nested_junction_is_parenthesised() {
    let mut tree = QueryTree::new();
    let x = tree.add(FieldNode::unscoped("x"));
    let y = tree.add(FieldNode::unscoped("y"));
    let and = tree.add_with_children(NodeKind::And, [x, y]).unwrap();
    let z = tree.add(FieldNode::unscoped("z"));
    let root = tree.add_with_children(NodeKind::Boolean, [and, z]).unwrap();

    insta::assert_snapshot!(write(&tree, root), @"( x AND y ) z");
}

#[test]
fn empty_clauses_are_skipped() {
    let mut tree = QueryTree::new();
    let empty = tree.add(NodeKind::Boolean);
    let none = tree.add(NodeKind::MatchNone);
    let a = tree.add(FieldNode::unscoped("a"));
    let root = tree
        .add_with_children(NodeKind::And, [empty, none, a])
        .unwrap();
    let lonely = tree.add(NodeKind::Or);

    assert_eq!(write(&tree, root), "a");
    assert_eq!(write(&tree, lonely), "");
}

#[test]
fn nested_modifiers_are_parenthesised() {
    let mut tree = QueryTree::new();
    let a = tree.add(FieldNode::unscoped("a"));
    let req = tree.add_with_children(Modifier::Req, [a]).unwrap();
    let not = tree.add_with_children(Modifier::Not, [req]).unwrap();

    assert_eq!(write(&tree, not), "-(+a)");
}

#[test]
fn standard_escaper_escapes_terms_and_fields() {
    let mut tree = QueryTree::new();
    let plus = tree.add(FieldNode::new("title", "c++"));
    let op = tree.add(FieldNode::unscoped("AND"));
    let space = tree.add(FieldNode::new("my field", "hello world"));
    let quoted = tree.add(NodeKind::QuotedField(FieldNode::new(
        "title",
        r#"say "hi" \o/"#,
    )));
    let root = tree
        .add_with_children(NodeKind::Boolean, [plus, op, space, quoted])
        .unwrap();

    insta::assert_snapshot!(write(&tree, root), @r#"title:c\+\+ \AND my\ field:hello\ world title:"say \"hi\" \\o/""#);
}

#[test]
fn verbatim_escaper_leaves_text() {
    let mut tree = QueryTree::new();
    let plus = tree.add(FieldNode::new("title", "c++"));

    assert_eq!(tree.get(plus).to_query_string(&Verbatim), "title:c++");
}

#[test]
fn default_field_is_omitted() {
    let mut tree = QueryTree::new();
    let a = tree.add(FieldNode::new("body", "a"));
    let b = tree.add(FieldNode::new("title", "b"));
    let c = tree.add(FieldNode::new(PLAINTEXT_FIELD, "c"));
    let root = tree.add_with_children(NodeKind::Boolean, [a, b, c]).unwrap();

    let res = QueryStringWriter::new(&StandardEscaper)
        .default_field("body")
        .write(tree.get(root));

    assert_eq!(res, "a title:b c");
}

#[test]
fn boost_and_slop_suffixes() {
    let mut tree = QueryTree::new();
    let a = tree.add(FieldNode::unscoped("a"));
    let half = tree.add_with_children(NodeKind::Boost(1.5), [a]).unwrap();
    let b = tree.add(FieldNode::unscoped("b"));
    let whole = tree.add_with_children(NodeKind::Boost(2.0), [b]).unwrap();
    let quick = tree.add(FieldNode::new("body", "quick"));
    let fox = tree.add(FieldNode::new("body", "fox").with_position_increment(2));
    let phrase = tree
        .add_with_children(NodeKind::TokenizedPhrase, [quick, fox])
        .unwrap();
    let slop = tree.add_with_children(NodeKind::Slop(3), [phrase]).unwrap();
    let root = tree
        .add_with_children(NodeKind::Boolean, [half, whole, slop])
        .unwrap();

    insta::assert_snapshot!(write(&tree, root), @r#"a^1.5 b^2 body:"quick fox"~3"#);
}

#[test]
fn fuzzy_suffix() {
    let mut tree = QueryTree::new();
    let ratio = tree.add(FuzzyNode::new(FieldNode::new("title", "roam"), 0.5, 0).unwrap());
    let edits = tree.add(FuzzyNode::new(FieldNode::unscoped("roam"), 2.0, 0).unwrap());

    assert_eq!(write(&tree, ratio), "title:roam~0.5");
    assert_eq!(write(&tree, edits), "roam~2");
}

#[test]
fn multi_phrase_keeps_every_alternative_and_gap() {
    let mut tree = QueryTree::new();
    let fox = tree.add(FieldNode::unscoped("fox").with_position_increment(3));
    let quick = tree.add(FieldNode::unscoped("quick"));
    let brown = tree.add(FieldNode::unscoped("brown"));
    let phrase = tree
        .add_with_children(NodeKind::MultiPhrase, [fox, quick, brown])
        .unwrap();

    insta::assert_snapshot!(write(&tree, phrase), @"{quick|brown ? fox}");
}

#[test]
fn multi_phrase_with_field_and_leading_gap() {
    let mut tree = QueryTree::new();
    let a = tree.add(FieldNode::new("title", "e-mail").with_position_increment(2));
    let b = tree.add(FieldNode::new("title", "email").with_position_increment(2));
    let c = tree.add(FieldNode::new("title", "address").with_position_increment(3));
    let phrase = tree
        .add_with_children(NodeKind::MultiPhrase, [a, b, c])
        .unwrap();

    insta::assert_snapshot!(write(&tree, phrase), @r"title:{? e\-mail|email address}");
}

#[test]
fn empty_multi_phrase_prints_nothing() {
    let mut tree = QueryTree::new();
    let phrase = tree.add(NodeKind::MultiPhrase);

    assert_eq!(write(&tree, phrase), "");
}

#[test]
fn match_all_and_extension() {
    let mut tree = QueryTree::new();
    let all = tree.add(NodeKind::MatchAll);
    let ext = tree.add(RegexpNode::new("title", "qu.*k"));
    let root = tree.add_with_children(NodeKind::Or, [all, ext]).unwrap();

    assert_eq!(write(&tree, root), "*:* OR title:/qu.*k/");
}
