use indoc::indoc;

use crate::{LoadError, MessageKey, NodeKind, RawNode, StandardEscaper, parse_tree};

#[test]
fn parse_nested_tree() {
    let json = indoc! {r#"
        {
          "type": "boolean",
          "children": [
            { "type": "field", "field": "title", "text": "fox", "begin": 6, "end": 9 },
            {
              "type": "modifier",
              "modifier": "not",
              "child": { "type": "quoted_field", "text": "red fox" }
            }
          ]
        }
    "#};

    let tree = parse_tree(json).unwrap();
    let root = tree.root().unwrap();

    insta::assert_snapshot!(tree.get(root).to_string(), @r"
    <boolean operation='default'>
      <field start='6' end='9' field='title' text='fox'/>
      <modifier operation='MOD_NOT'>
        <quotedfield start='0' end='0' text='red fox'/>
      </modifier>
    </boolean>
    ");
}

#[test]
fn proximity_load_propagates_field() {
    let json = indoc! {r#"
        {
          "type": "proximity",
          "field": "title",
          "proximity_type": "number",
          "distance": 5,
          "in_order": true,
          "children": [
            { "type": "field", "field": "body", "text": "quick" },
            { "type": "field", "text": "fox" }
          ]
        }
    "#};

    let tree = parse_tree(json).unwrap();
    let root = tree.root().unwrap();

    assert_eq!(
        tree.get(root).to_query_string(&StandardEscaper),
        "title:(( quick fox ) WITHIN 5 INORDER)"
    );
    for &child in tree.children(root) {
        assert_eq!(tree.kind(child).field(), Some("title"));
    }
}

#[test]
fn proximity_distance_defaults_to_sentinel() {
    let json = r#"{ "type": "proximity", "proximity_type": "sentence" }"#;

    let tree = parse_tree(json).unwrap();
    let NodeKind::Proximity(node) = tree.kind(tree.root().unwrap()) else {
        panic!("expected proximity");
    };

    assert_eq!(node.distance(), None);
    assert!(!node.in_order());
}

#[test]
fn invalid_distance_is_a_node_error() {
    let json = r#"{ "type": "proximity", "proximity_type": "number", "distance": 0 }"#;

    let err = match parse_tree(json).unwrap_err() {
        LoadError::Node(err) => err,
        other => panic!("expected node error, got {other}"),
    };
    assert_eq!(err.message().key(), MessageKey::ParameterValueNotSupported);
    assert_eq!(err.to_string(), "parameter `distance` does not support value `0`");
}

#[test]
fn unknown_type_is_a_json_error() {
    let err = parse_tree(r#"{ "type": "wildcard", "text": "a*" }"#).unwrap_err();

    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn to_raw_round_trips() {
    let json = indoc! {r#"
        {
          "type": "and",
          "children": [
            { "type": "fuzzy", "term": { "text": "roam" }, "similarity": 0.5, "prefix_length": 1 },
            { "type": "boost", "value": 2.0, "child": { "type": "match_all" } },
            {
              "type": "slop",
              "value": 2,
              "child": {
                "type": "multi_phrase",
                "children": [
                  { "type": "field", "text": "quick" },
                  { "type": "field", "text": "fox", "position_increment": 2 }
                ]
              }
            },
            { "type": "proximity", "proximity_type": "paragraph", "children": [] }
          ]
        }
    "#};

    let tree = parse_tree(json).unwrap();
    let raw = tree.to_raw(tree.root().unwrap()).unwrap();
    let expected: RawNode = serde_json::from_str(json).unwrap();

    assert_eq!(raw, expected);
}

#[test]
fn to_raw_serializes_compactly() {
    let tree = parse_tree(r#"{ "type": "group", "child": { "type": "field", "text": "a" } }"#)
        .unwrap();

    let raw = tree.to_raw(tree.root().unwrap()).unwrap();
    let res = serde_json::to_string(&raw).unwrap();

    insta::assert_snapshot!(res, @r#"{"type":"group","child":{"type":"field","text":"a","begin":0,"end":0,"position_increment":1}}"#);
}

#[test]
fn extension_has_no_json_form() {
    let mut tree = crate::QueryTree::new();
    let ext = tree.add(crate::nodes_tests::RegexpNode::new("title", "a+"));

    let err = tree.to_raw(ext).unwrap_err();

    assert_eq!(
        err.to_string(),
        "`regexp` node does not support this action: serialize to JSON"
    );
}
