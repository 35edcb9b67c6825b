use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::tree_loader::{load_tree, load_tree_source};

const TREE: &str = r#"{"type":"and","children":[
    {"type":"field","field":"title","text":"quick"},
    {"type":"field","field":"title","text":"fox"}
]}"#;

fn temp_tree(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_tree_from_file() {
    let file = temp_tree(TREE);
    let tree = load_tree(Some(file.path()), None).unwrap();

    let root = tree.root().expect("loaded tree has a root");
    assert_eq!(tree.get(root).children().count(), 2);
}

#[test]
fn inline_text_wins_over_path() {
    let source = load_tree_source(
        Some(Path::new("does/not/exist.json")),
        Some(r#"{"type":"match_all"}"#),
    )
    .unwrap();
    assert_eq!(source, r#"{"type":"match_all"}"#);
}

#[test]
fn missing_file_reports_path() {
    let err = load_tree_source(Some(Path::new("does/not/exist.json")), None).unwrap_err();
    assert!(err.starts_with("failed to read 'does/not/exist.json':"), "{err}");
}

#[test]
fn empty_input_is_rejected() {
    let file = temp_tree("  \n");
    let err = load_tree(Some(file.path()), None).unwrap_err();
    assert_eq!(err, "query tree cannot be empty");
}

#[test]
fn malformed_json_is_reported() {
    let err = load_tree(None, Some(r#"{"type":"field""#)).unwrap_err();
    assert!(err.starts_with("invalid tree JSON:"), "{err}");
}

#[test]
fn unknown_node_type_is_reported() {
    let err = load_tree(None, Some(r#"{"type":"span_near"}"#)).unwrap_err();
    assert!(err.starts_with("invalid tree JSON:"), "{err}");
}

#[test]
fn no_input_is_rejected() {
    let err = load_tree_source(None, None).unwrap_err();
    assert_eq!(
        err,
        "query tree is required: use positional argument or -t/--tree"
    );
}
