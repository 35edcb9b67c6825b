use crate::{FieldNode, NodeKind, QueryTree, TagKey, TagStore};

const ARTIFACT: TagKey = TagKey::new("artifact");
const NOTE: TagKey = TagKey::new("note");

#[test]
fn unset_tag_is_absent() {
    let mut tree = QueryTree::new();
    let a = tree.add(NodeKind::MatchAll);
    let tags: TagStore<u32> = TagStore::new();

    assert_eq!(tags.get(a, ARTIFACT), None);
    assert!(!tags.contains(a, ARTIFACT));
    assert!(tags.is_empty());
}

#[test]
fn set_overwrites_and_returns_previous() {
    let mut tree = QueryTree::new();
    let a = tree.add(NodeKind::MatchAll);
    let mut tags = TagStore::new();

    assert_eq!(tags.set(a, ARTIFACT, "first"), None);
    assert_eq!(tags.set(a, ARTIFACT, "second"), Some("first"));
    assert_eq!(tags.get(a, ARTIFACT), Some(&"second"));
    assert_eq!(tags.len(), 1);
}

#[test]
fn keys_are_independent() {
    let mut tree = QueryTree::new();
    let a = tree.add(NodeKind::MatchAll);
    let b = tree.add(NodeKind::MatchNone);
    let mut tags = TagStore::new();

    tags.set(a, ARTIFACT, 1);
    tags.set(a, NOTE, 2);
    tags.set(b, ARTIFACT, 3);

    let on_a: Vec<_> = tags.tags_of(a).map(|(k, v)| (k.name(), *v)).collect();
    assert_eq!(on_a, [("artifact", 1), ("note", 2)]);
    assert_eq!(tags.remove(a, ARTIFACT), Some(1));
    assert_eq!(tags.get(b, ARTIFACT), Some(&3));
    assert_eq!(tags.len(), 2);

    tags.clear();
    assert!(tags.is_empty());
}

#[test]
fn cloned_tree_carries_no_tags() {
    let mut tree = QueryTree::new();
    let a = tree.add(FieldNode::unscoped("a"));
    let root = tree.add_with_children(NodeKind::Boolean, [a]).unwrap();
    let mut tags = TagStore::new();
    tags.set(root, ARTIFACT, "compiled");

    let copy = tree.clone_subtree(root);

    assert!(tags.contains(root, ARTIFACT));
    assert!(!tags.contains(copy, ARTIFACT));
    assert_eq!(tags.tags_of(copy).count(), 0);
}
