use super::*;

fn trie(keys: &[(&str, u8)]) -> Trie<u8> {
    new_trie(keys.iter().map(|(k, v)| (k.to_string(), *v)))
}

#[test]
fn test_in_trie_classification() {
    let t = trie(&[("GROUP BY", 1), ("GROUP", 2)]);
    assert_eq!(t.in_trie("GROUP"), TrieResult::Exists);
    assert_eq!(t.in_trie("GROUP B"), TrieResult::Prefix);
    assert_eq!(t.in_trie("GROUP BY"), TrieResult::Exists);
    assert_eq!(t.in_trie("ORDER"), TrieResult::Failed);
    assert_eq!(t.in_trie(""), TrieResult::Failed);
}

#[test]
fn test_get_returns_terminal_value() {
    let t = trie(&[("VAR", 7)]);
    assert_eq!(t.get("VAR"), Some(&7));
    assert_eq!(t.get("VA"), None);
}

#[test]
fn test_merge_disjoint_is_commutative() {
    let a = trie(&[("ORDER BY", 1), ("PARTITION BY", 2)]);
    let b = trie(&[("CREATE OR REPLACE PROCEDURE", 3), ("VAR X = Y", 4)]);
    assert_eq!(a.merge(&b), b.merge(&a));
    assert_eq!(
        a.merge(&b).keys(),
        vec![
            "CREATE OR REPLACE PROCEDURE",
            "ORDER BY",
            "PARTITION BY",
            "VAR X = Y"
        ]
    );
}

#[test]
fn test_merge_overlapping_subtries_recursively() {
    let a = trie(&[("GROUP BY", 1)]);
    let b = trie(&[("GROUPING", 2), ("GROUP", 3)]);
    let merged = a.merge(&b);
    assert_eq!(merged.get("GROUP BY"), Some(&1));
    assert_eq!(merged.get("GROUPING"), Some(&2));
    assert_eq!(merged.get("GROUP"), Some(&3));
    assert_eq!(merged, b.merge(&a));
}

#[test]
fn test_merge_terminal_collision_prefers_first() {
    let a = trie(&[("JSON", 1)]);
    let b = trie(&[("JSON", 2)]);
    assert_eq!(a.merge(&b).get("JSON"), Some(&1));
    assert_eq!(b.merge(&a).get("JSON"), Some(&2));
}

#[test]
fn test_merge_with_empty_is_identity() {
    let a = trie(&[("ORDER BY", 1)]);
    let empty = Trie::new();
    assert_eq!(a.merge(&empty), a);
    assert_eq!(empty.merge(&a), a);
    assert!(empty.is_empty());
}
