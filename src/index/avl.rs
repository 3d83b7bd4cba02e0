// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Frequency-ranked autocomplete over an AVL tree.
//!
//! Words are kept in a height-balanced binary search tree, each with an
//! accumulated frequency. Inserting an existing word adds to its frequency
//! instead of replacing it.
//!
//! # Balance
//!
//! Every node caches its subtree height (leaf = 1, missing child = 0). After
//! each insertion the path back to the root is rebalanced with one of four
//! rotations, chosen by the balance factor `height(left) - height(right)`:
//!
//! | Case        | Node factor | Child factor | Fix                          |
//! |-------------|-------------|--------------|------------------------------|
//! | Left-Left   | > 1         | left ≥ 0     | rotate right                 |
//! | Left-Right  | > 1         | left < 0     | rotate left child, then right |
//! | Right-Right | < -1        | right ≤ 0    | rotate left                  |
//! | Right-Left  | < -1        | right > 0    | rotate right child, then left |
//!
//! # Top-K
//!
//! `top_completions` walks the whole tree, filters by prefix, and keeps the
//! best `k` in a bounded min-heap. O(n log k) per query. Ties on frequency go
//! to the lexicographically smaller word, so results are deterministic.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::types::VocabularyEntry;
use crate::utils::normalize;

type Link = Option<Box<AvlNode>>;

#[derive(Debug, Clone)]
struct AvlNode {
    word: String,
    frequency: u64,
    height: usize,
    left: Link,
    right: Link,
}

impl AvlNode {
    fn leaf(word: String, frequency: u64) -> Box<Self> {
        Box::new(Self {
            word,
            frequency,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

#[inline]
fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

fn rotate_right(mut node: Box<AvlNode>) -> Box<AvlNode> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_left(mut node: Box<AvlNode>) -> Box<AvlNode> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

fn rebalance(mut node: Box<AvlNode>) -> Box<AvlNode> {
    node.update_height();
    let factor = node.balance_factor();

    if factor > 1 {
        // Left-Right: straighten the left child first
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if factor < -1 {
        // Right-Left
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

/// Insert or accumulate. Sets `added` when a new node was created.
fn insert(link: Link, word: String, delta: u64, added: &mut bool) -> Box<AvlNode> {
    let Some(mut node) = link else {
        *added = true;
        return AvlNode::leaf(word, delta);
    };

    match word.cmp(&node.word) {
        Ordering::Less => node.left = Some(insert(node.left.take(), word, delta, added)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), word, delta, added)),
        Ordering::Equal => {
            node.frequency = node.frequency.saturating_add(delta);
            return node;
        }
    }
    rebalance(node)
}

fn in_order<'a>(link: &'a Link, visit: &mut impl FnMut(&'a AvlNode)) {
    if let Some(node) = link {
        in_order(&node.left, visit);
        visit(node);
        in_order(&node.right, visit);
    }
}

/// Heap entry for top-K selection.
///
/// `BinaryHeap` pops its greatest element, so "greater" here means "worse":
/// lower frequency, then the later word.
#[derive(PartialEq, Eq)]
struct Ranked<'a> {
    frequency: u64,
    word: &'a str,
}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        (Reverse(self.frequency), self.word).cmp(&(Reverse(other.frequency), other.word))
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Words with accumulated frequencies, ranked for prefix completion.
#[derive(Debug, Clone, Default)]
pub struct RankedCompletionIndex {
    root: Link,
    len: usize,
}

impl RankedCompletionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` to `word`'s frequency, inserting it if absent.
    ///
    /// Words are normalized first; a blank word is ignored.
    pub fn insert(&mut self, word: &str, delta: u64) {
        let word = normalize(word);
        if word.is_empty() {
            return;
        }
        let mut added = false;
        self.root = Some(insert(self.root.take(), word, delta, &mut added));
        if added {
            self.len += 1;
        }
    }

    /// The `k` most frequent words starting with `prefix`, most frequent
    /// first. Equal frequencies are ordered by word.
    ///
    /// An empty prefix or `k == 0` yields nothing.
    pub fn top_completions(&self, prefix: &str, k: usize) -> Vec<VocabularyEntry> {
        let prefix = normalize(prefix);
        if prefix.is_empty() || k == 0 {
            return Vec::new();
        }

        let mut heap: BinaryHeap<Ranked<'_>> = BinaryHeap::with_capacity(k + 1);
        in_order(&self.root, &mut |node| {
            if node.word.starts_with(&prefix) {
                heap.push(Ranked {
                    frequency: node.frequency,
                    word: &node.word,
                });
                if heap.len() > k {
                    heap.pop(); // drop the current worst
                }
            }
        });

        heap.into_sorted_vec()
            .into_iter()
            .map(|ranked| VocabularyEntry::new(ranked.word, ranked.frequency))
            .collect()
    }

    /// Accumulated frequency of `word`, if present.
    pub fn frequency(&self, word: &str) -> Option<u64> {
        let word = normalize(word);
        let mut link = &self.root;
        while let Some(node) = link {
            match word.cmp(&node.word) {
                Ordering::Less => link = &node.left,
                Ordering::Greater => link = &node.right,
                Ordering::Equal => return Some(node.frequency),
            }
        }
        None
    }

    /// Every entry in word order.
    pub fn entries(&self) -> Vec<VocabularyEntry> {
        let mut entries = Vec::with_capacity(self.len);
        in_order(&self.root, &mut |node| {
            entries.push(VocabularyEntry::new(node.word.clone(), node.frequency));
        });
        entries
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree (0 when empty).
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Every node's subtrees differ in height by at most one, and every
    /// cached height is correct.
    pub fn is_balanced(&self) -> bool {
        fn check(link: &Link) -> Option<usize> {
            let Some(node) = link else {
                return Some(0);
            };
            let left = check(&node.left)?;
            let right = check(&node.right)?;
            let actual = 1 + left.max(right);
            (left.abs_diff(right) <= 1 && node.height == actual).then_some(actual)
        }
        check(&self.root).is_some()
    }

    /// In-order traversal is strictly increasing.
    pub fn is_ordered(&self) -> bool {
        let mut previous: Option<&str> = None;
        let mut ordered = true;
        in_order(&self.root, &mut |node| {
            if previous.is_some_and(|prev| prev >= node.word.as_str()) {
                ordered = false;
            }
            previous = Some(node.word.as_str());
        });
        ordered
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for RankedCompletionIndex {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut index = RankedCompletionIndex::new();
        for (word, frequency) in iter {
            index.insert(word.as_ref(), frequency);
        }
        index
    }
}
