//! Keyword trie used to fuse multi-word keywords into single tokens

use std::collections::HashMap;

/// Result of looking a key up in a trie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieResult {
    /// No key starts with the probe
    Failed,
    /// The probe is a proper prefix of at least one key
    Prefix,
    /// The probe is a key
    Exists,
}

/// A character trie with a value at every terminal node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie<V> {
    children: HashMap<char, Trie<V>>,
    value: Option<V>,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }

    pub fn insert(&mut self, key: &str, value: V) {
        let mut current = self;
        for ch in key.chars() {
            current = current.children.entry(ch).or_default();
        }
        current.value = Some(value);
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.node(key).and_then(|node| node.value.as_ref())
    }

    /// Classify `key` against the trie
    pub fn in_trie(&self, key: &str) -> TrieResult {
        if key.is_empty() {
            return TrieResult::Failed;
        }
        match self.node(key) {
            None => TrieResult::Failed,
            Some(node) if node.value.is_some() => TrieResult::Exists,
            Some(_) => TrieResult::Prefix,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.value.is_none()
    }

    /// All keys, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        self.collect_keys(&mut String::new(), &mut keys);
        keys.sort();
        keys
    }

    fn collect_keys(&self, prefix: &mut String, keys: &mut Vec<String>) {
        if self.value.is_some() {
            keys.push(prefix.clone());
        }
        for (ch, child) in &self.children {
            prefix.push(*ch);
            child.collect_keys(prefix, keys);
            prefix.pop();
        }
    }

    fn node(&self, key: &str) -> Option<&Trie<V>> {
        let mut current = self;
        for ch in key.chars() {
            current = current.children.get(&ch)?;
        }
        Some(current)
    }
}

impl<V: Clone> Trie<V> {
    /// Deep union of two tries.
    ///
    /// Subtries present on both sides are merged recursively. When both sides
    /// hold a terminal value for the same key, the value from `self` is kept.
    pub fn merge(&self, other: &Trie<V>) -> Trie<V> {
        let mut children = self.children.clone();
        for (ch, theirs) in &other.children {
            let merged = match self.children.get(ch) {
                Some(ours) => ours.merge(theirs),
                None => theirs.clone(),
            };
            children.insert(*ch, merged);
        }
        Trie {
            children,
            value: self.value.clone().or_else(|| other.value.clone()),
        }
    }
}

/// Build a trie from `(key, value)` pairs
pub fn new_trie<V, I>(entries: I) -> Trie<V>
where
    I: IntoIterator<Item = (String, V)>,
{
    let mut trie = Trie::new();
    for (key, value) in entries {
        trie.insert(&key, value);
    }
    trie
}

#[cfg(test)]
#[path = "trie_test.rs"]
mod tests;
