use indoc::indoc;

use flexq_core::{FieldNode, MessageKey, NodeKind, QueryTree, parse_tree};

use crate::{CompileError, CompileOptions, Query, TreeCompiler};

fn compile(json: &str) -> Query {
    let tree = parse_tree(json).unwrap();
    TreeCompiler::standard()
        .with_options(CompileOptions::new().default_field("body"))
        .compile(&tree)
        .unwrap()
}

#[test]
fn and_requires_every_clause() {
    let query = compile(indoc! {r#"
        {
          "type": "and",
          "children": [
            { "type": "field", "text": "quick" },
            { "type": "modifier", "modifier": "not", "child": { "type": "field", "text": "slow" } }
          ]
        }
    "#});

    insta::assert_snapshot!(query, @r"
    Boolean
      MUST Term body:quick
      MUST_NOT Term body:slow
    ");
}

#[test]
fn or_makes_clauses_optional() {
    let query = compile(indoc! {r#"
        {
          "type": "or",
          "children": [
            { "type": "field", "text": "quick" },
            { "type": "modifier", "modifier": "req", "child": { "type": "field", "text": "fox" } },
            { "type": "modifier", "modifier": "none", "child": { "type": "field", "text": "dog" } }
          ]
        }
    "#});

    insta::assert_snapshot!(query, @r"
    Boolean
      SHOULD Term body:quick
      MUST Term body:fox
      SHOULD Term body:dog
    ");
}

#[test]
fn nested_groups_keep_structure() {
    let query = compile(indoc! {r#"
        {
          "type": "boolean",
          "children": [
            {
              "type": "group",
              "child": {
                "type": "and",
                "children": [
                  { "type": "field", "text": "a" },
                  { "type": "field", "text": "b" }
                ]
              }
            },
            { "type": "match_all" }
          ]
        }
    "#});

    insta::assert_snapshot!(query, @r"
    Boolean
      SHOULD Boolean
        MUST Term body:a
        MUST Term body:b
      SHOULD MatchAll
    ");
}

#[test]
fn empty_boolean_has_no_clauses() {
    let query = compile(r#"{ "type": "boolean" }"#);

    assert_eq!(query, Query::Boolean { clauses: vec![] });
}

#[test]
fn too_many_clauses() {
    let mut tree = QueryTree::new();
    let terms: Vec<_> = ["a", "b", "c"]
        .into_iter()
        .map(|t| tree.add(FieldNode::unscoped(t)))
        .collect();
    let root = tree.add_with_children(NodeKind::Or, terms).unwrap();
    tree.set_root(root);
    let compiler = TreeCompiler::standard().with_options(CompileOptions::new().max_clause_count(2));

    let err = compiler.compile(&tree).unwrap_err();

    assert!(matches!(err, CompileError::Build { .. }));
    assert_eq!(err.message().unwrap().key(), MessageKey::TooManyBooleanClauses);
    assert_eq!(
        err.to_string(),
        "too many boolean clauses, the maximum supported is 2: a OR b OR c"
    );
}

#[test]
fn clause_limit_is_inclusive() {
    let mut tree = QueryTree::new();
    let a = tree.add(FieldNode::unscoped("a"));
    let b = tree.add(FieldNode::unscoped("b"));
    let root = tree.add_with_children(NodeKind::And, [a, b]).unwrap();
    tree.set_root(root);
    let compiler = TreeCompiler::standard().with_options(CompileOptions::new().max_clause_count(2));

    assert!(compiler.compile(&tree).is_ok());
}
