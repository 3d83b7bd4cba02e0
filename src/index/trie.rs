// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix tree over `a`-`z` tokens.
//!
//! Every node owns up to 26 boxed children, one per letter. Nodes are created
//! lazily along an insertion path and never removed; an index that needs to
//! forget something is rebuilt from scratch.
//!
//! Characters outside `a`-`z` are skipped during insertion and queries, so
//! "T14s" is stored as "ts". The empty word is never stored.
//!
//! The node type is generic over a per-node payload so the inverted index can
//! hang document-id sets off the same structure.

use crate::utils::to_token;

const ALPHABET: usize = 26;

/// Child slot for a character, or `None` when it is not a token character.
#[inline]
fn slot(c: char) -> Option<usize> {
    let c = c.to_ascii_lowercase();
    c.is_ascii_lowercase().then(|| (c as u8 - b'a') as usize)
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Node<T> {
    children: [Option<Box<Node<T>>>; ALPHABET],
    pub(crate) terminal: bool,
    pub(crate) payload: T,
}

impl<T: Default> Node<T> {
    /// Walk `token`, creating missing nodes, and return the last one.
    pub(crate) fn walk_or_create(&mut self, token: &str) -> &mut Node<T> {
        let mut node = self;
        for i in token.chars().filter_map(slot) {
            node = node.children[i].get_or_insert_with(Box::default).as_mut();
        }
        node
    }

    /// The node at the end of `token`, if the whole path exists.
    pub(crate) fn find(&self, token: &str) -> Option<&Node<T>> {
        let mut node = self;
        for i in token.chars().filter_map(slot) {
            node = node.children[i].as_deref()?;
        }
        Some(node)
    }

    /// Depth-first walk in `a`-`z` order, calling `visit` at every terminal.
    ///
    /// `path` holds the word spelled so far and is restored on return.
    pub(crate) fn for_each_terminal<F>(&self, path: &mut String, visit: &mut F)
    where
        F: FnMut(&str, &Node<T>),
    {
        if self.terminal {
            visit(path, self);
        }
        for (i, child) in self.children.iter().enumerate() {
            if let Some(child) = child {
                path.push((b'a' + i as u8) as char);
                child.for_each_terminal(path, visit);
                path.pop();
            }
        }
    }
}

/// A set of vocabulary words with prefix and substring queries.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: Node<()>,
    len: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word. Returns `true` if it was not already present.
    ///
    /// A word with no `a`-`z` characters stores nothing.
    pub fn insert(&mut self, word: &str) -> bool {
        let token = to_token(word);
        if token.is_empty() {
            return false;
        }

        let node = self.root.walk_or_create(&token);
        let added = !node.terminal;
        node.terminal = true;
        if added {
            self.len += 1;
        }
        added
    }

    /// Every stored word starting with `prefix`, in lexicographic order.
    ///
    /// An empty prefix, or one with no path in the trie, yields nothing.
    pub fn prefix_query(&self, prefix: &str) -> Vec<String> {
        let mut prefix = to_token(prefix);
        if prefix.is_empty() {
            return Vec::new();
        }
        let Some(start) = self.root.find(&prefix) else {
            return Vec::new();
        };

        let mut words = Vec::new();
        start.for_each_terminal(&mut prefix, &mut |word: &str, _: &Node<()>| {
            words.push(word.to_string())
        });
        words
    }

    /// Every stored word containing `needle`, in lexicographic order.
    ///
    /// Linear in the number of stored words.
    pub fn contains_substring(&self, needle: &str) -> Vec<String> {
        let needle = to_token(needle);
        if needle.is_empty() {
            return Vec::new();
        }
        self.words()
            .into_iter()
            .filter(|word| word.contains(&needle))
            .collect()
    }

    /// Every stored word, in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        self.root
            .for_each_terminal(&mut String::new(), &mut |word: &str, _: &Node<()>| {
                words.push(word.to_string())
            });
        words
    }

    /// Exact membership.
    pub fn contains(&self, word: &str) -> bool {
        let token = to_token(word);
        !token.is_empty() && self.root.find(&token).is_some_and(|node| node.terminal)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}
