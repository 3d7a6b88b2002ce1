//! Property tests for get/set round-trips, total absence and merge idempotence

use layercfg_tree::{Content, Map, Tree, get, merge, set};
use proptest::prelude::*;

fn arb_leaf() -> impl Strategy<Value = Tree> {
    prop_oneof![
        Just(Tree::NULL),
        any::<bool>().prop_map(Tree::from),
        any::<i64>().prop_map(Tree::from),
        "[a-z0-9 ]{0,8}".prop_map(Tree::from),
    ]
}

fn arb_tree() -> impl Strategy<Value = Tree> {
    arb_leaf().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Tree::Array),
            prop::collection::btree_map("[a-c]{1,2}", inner, 0..4).prop_map(Tree::Object),
        ]
    })
}

fn arb_object() -> impl Strategy<Value = Map> {
    prop::collection::btree_map("[a-c]{1,2}", arb_tree(), 0..5)
}

/// Paths that start with a key and only ever index slot 0, so every
/// prefix can be auto-vivified on an empty store.
fn arb_fresh_path() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        "[a-z]{1,5}".prop_map(|key| format!(".{key}")),
        Just("[0]".to_string()),
    ];
    ("[a-z]{1,5}", prop::collection::vec(segment, 0..6))
        .prop_map(|(head, rest)| format!("{head}{}", rest.concat()))
}

proptest! {
    #[test]
    fn set_then_get_round_trips(path in arb_fresh_path(), value in arb_leaf()) {
        let mut content = Content::new();
        content.set(&path, value.clone()).unwrap();
        prop_assert_eq!(content.get(&path), value);
    }

    #[test]
    fn get_never_panics_and_misses_are_nil(tree in arb_object(), path in "[a-z\\[\\]0-9.-]{0,16}") {
        let root = Tree::Object(tree);
        let _ = get(&root, &path).to_string();
        let missing = format!("zzz_missing.{path}");
        prop_assert!(get(&root, &missing).is_nil());
    }

    #[test]
    fn set_never_panics(tree in arb_object(), path in "[a-c\\[\\]0-2.x-]{0,12}", value in arb_leaf()) {
        let mut root = Tree::Object(tree);
        let _ = set(&mut root, &path, value);
        prop_assert_eq!(root.kind(), layercfg_tree::Kind::Object);
    }

    #[test]
    fn merging_twice_equals_merging_once(dst in arb_object(), src in arb_object()) {
        let mut once = dst;
        merge(&mut once, src.clone());
        let mut twice = once.clone();
        merge(&mut twice, src);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_keeps_unrelated_keys(dst in arb_object(), src in arb_object()) {
        let mut merged = dst.clone();
        merge(&mut merged, src.clone());
        for (key, value) in &dst {
            if !src.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
        for key in src.keys() {
            prop_assert!(merged.contains_key(key));
        }
    }
}
