//! A prefix tree of words, the host structure the fuzzy search driver
//! walks (see [`crate::search`]).
//!
//! The root is a bare set of edges - there is no node at the root, so
//! there is nowhere to store an `end` flag for the empty string. Inserting
//! `""` is therefore a silent no-op.

use crate::contracts::check_no_dangling_leaf;
use std::collections::hash_map;
use std::collections::HashMap;

/// One trie node: whether a word ends here, and the outgoing edges.
#[derive(Debug, Clone, Default)]
pub struct Node {
    end: bool,
    children: HashMap<char, Node>,
}

impl Node {
    /// Whether a word ends at this node.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.end
    }

    /// Outgoing edges from this node. Order is unspecified.
    #[inline]
    pub fn children(&self) -> hash_map::Iter<'_, char, Node> {
        self.children.iter()
    }

    #[inline]
    fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A trie of words, built with [`Trie::add`] and [`Trie::delete`].
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: HashMap<char, Node>,
}

impl Trie {
    /// An empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root's outgoing edges - the entry point for a trie walk.
    #[inline]
    pub fn children(&self) -> hash_map::Iter<'_, char, Node> {
        self.root.iter()
    }

    /// Insert `word`. A no-op on the tree's structure if `word` is already
    /// present, except that it always (re-)sets the final node's
    /// `end` flag - including when that node was already present as a
    /// prefix of some longer word. The empty string is a silent no-op:
    /// there is no root node to mark as a word end.
    pub fn add(&mut self, word: &str) {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return;
        }
        let mut children = &mut self.root;
        let last = chars.len() - 1;
        for (i, &c) in chars.iter().enumerate() {
            let node = children.entry(c).or_default();
            if i == last {
                node.end = true;
            }
            children = &mut node.children;
        }
    }

    /// Remove `word` if present; a silent no-op otherwise. If `word` has
    /// proper extensions still in the trie, only its `end` flag is
    /// cleared; otherwise trailing nodes are unlinked bottom-up until a
    /// node with remaining children or `end=true` is reached.
    pub fn delete(&mut self, word: &str) {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() || !self.contains(word) {
            return;
        }
        if delete_rec(&mut self.root, &chars) {
            self.root.remove(&chars[0]);
        }
    }

    /// Whether `word` is present as a complete entry (not just a prefix).
    pub fn contains(&self, word: &str) -> bool {
        let mut children = &self.root;
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return false;
        }
        for (i, c) in chars.iter().enumerate() {
            match children.get(c) {
                Some(node) => {
                    if i == chars.len() - 1 {
                        return node.end;
                    }
                    children = &node.children;
                }
                None => return false,
            }
        }
        false
    }
}

/// Delete the path `word` from `children`. Returns whether the caller
/// should remove its own entry for `word[0]` from its parent map.
fn delete_rec(children: &mut HashMap<char, Node>, word: &[char]) -> bool {
    let c = word[0];
    let node = children.get_mut(&c).expect("path already verified present");
    if word.len() == 1 {
        node.end = false;
    } else if delete_rec(&mut node.children, &word[1..]) {
        node.children.remove(&word[1]);
    }
    let remove_from_parent = !node.end && !node.has_children();
    // A node being unlinked by its own parent is temporarily "dangling"
    // by construction; the invariant only binds nodes that stay.
    if !remove_from_parent {
        check_no_dangling_leaf(node.has_children(), node.end);
    }
    remove_from_parent
}
