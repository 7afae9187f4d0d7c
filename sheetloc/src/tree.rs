//! The per-locale nested translation tree.
//!
//! Built from data rows during sheet processing and handed to an exporter.
//! Entries are kept in first-seen order in a plain `Vec`, not a hash map, so
//! serialized output is reproducible byte-for-byte across runs.

use serde::{Serialize, Serializer, ser::SerializeMap};
use thiserror::Error;

use crate::keypath::KeyPath;

/// A node under a key segment: either a translated message or a subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(String),
    Branch(TranslationTree),
}

/// Raised by [`TranslationTree::insert_unique`] when a path collides with an
/// existing entry. The first-inserted value is kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    #[error("key already has a value")]
    Duplicate,

    #[error("key conflicts with an existing group")]
    Conflict,
}

/// An insertion-ordered mapping from key segment to [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslationTree {
    nodes: Vec<(String, Node)>,
}

impl TranslationTree {
    pub fn new() -> Self {
        TranslationTree::default()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates the direct children in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Number of leaf messages in the whole tree.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|(_, node)| match node {
                Node::Leaf(_) => 1,
                Node::Branch(subtree) => subtree.leaf_count(),
            })
            .sum()
    }

    /// Looks up the message at `path`, descending through branches.
    pub fn get(&self, path: &KeyPath) -> Option<&str> {
        let mut nodes = &self.nodes;
        let (last, rest) = path.segments().split_last()?;
        for segment in rest {
            match nodes.iter().find(|(key, _)| key == segment) {
                Some((_, Node::Branch(subtree))) => nodes = &subtree.nodes,
                _ => return None,
            }
        }
        match nodes.iter().find(|(key, _)| key == last) {
            Some((_, Node::Leaf(value))) => Some(value),
            _ => None,
        }
    }

    /// Sets the message at `path`, creating intermediate branches as needed.
    ///
    /// Last write wins: an existing leaf is overwritten (its previous value is
    /// returned) and an existing branch in the way is replaced.
    pub fn insert(&mut self, path: &KeyPath, value: impl Into<String>) -> Option<String> {
        Self::insert_inner(&mut self.nodes, path.segments(), value.into())
    }

    /// Sets the message at `path` only if nothing is there yet.
    ///
    /// Used by the `reject` duplicate policy: the tree is left untouched and
    /// the caller records the collision as a parse issue.
    pub fn insert_unique(
        &mut self,
        path: &KeyPath,
        value: impl Into<String>,
    ) -> Result<(), InsertError> {
        Self::insert_unique_inner(&mut self.nodes, path.segments(), value.into())
    }

    fn insert_inner(
        nodes: &mut Vec<(String, Node)>,
        segments: &[String],
        value: String,
    ) -> Option<String> {
        let (head, rest) = segments
            .split_first()
            .expect("key paths always have at least one segment");
        let position = nodes.iter().position(|(key, _)| key == head);

        if rest.is_empty() {
            return match position {
                Some(index) => match std::mem::replace(&mut nodes[index].1, Node::Leaf(value)) {
                    Node::Leaf(previous) => Some(previous),
                    Node::Branch(_) => None,
                },
                None => {
                    nodes.push((head.clone(), Node::Leaf(value)));
                    None
                }
            };
        }

        let index = match position {
            Some(index) => {
                if let Node::Leaf(_) = nodes[index].1 {
                    nodes[index].1 = Node::Branch(TranslationTree::new());
                }
                index
            }
            None => {
                nodes.push((head.clone(), Node::Branch(TranslationTree::new())));
                nodes.len() - 1
            }
        };
        match &mut nodes[index].1 {
            Node::Branch(subtree) => Self::insert_inner(&mut subtree.nodes, rest, value),
            Node::Leaf(_) => unreachable!("leaf was just replaced by a branch"),
        }
    }

    fn insert_unique_inner(
        nodes: &mut Vec<(String, Node)>,
        segments: &[String],
        value: String,
    ) -> Result<(), InsertError> {
        let (head, rest) = segments
            .split_first()
            .expect("key paths always have at least one segment");
        let position = nodes.iter().position(|(key, _)| key == head);

        if rest.is_empty() {
            return match position {
                Some(index) => match nodes[index].1 {
                    Node::Leaf(_) => Err(InsertError::Duplicate),
                    Node::Branch(_) => Err(InsertError::Conflict),
                },
                None => {
                    nodes.push((head.clone(), Node::Leaf(value)));
                    Ok(())
                }
            };
        }

        match position {
            Some(index) => match &mut nodes[index].1 {
                Node::Branch(subtree) => {
                    Self::insert_unique_inner(&mut subtree.nodes, rest, value)
                }
                Node::Leaf(_) => Err(InsertError::Conflict),
            },
            None => {
                nodes.push((head.clone(), Node::Branch(TranslationTree::new())));
                match &mut nodes.last_mut().expect("just pushed").1 {
                    Node::Branch(subtree) => {
                        Self::insert_unique_inner(&mut subtree.nodes, rest, value)
                    }
                    Node::Leaf(_) => unreachable!("just pushed a branch"),
                }
            }
        }
    }

    /// Flattens the tree into `(joined key, message)` pairs in insertion
    /// order, joining segments with `separator`. Used by flat output formats.
    pub fn flatten(&self, separator: &str) -> Vec<(String, &str)> {
        let mut pairs = Vec::with_capacity(self.leaf_count());
        self.flatten_into(separator, "", &mut pairs);
        pairs
    }

    fn flatten_into<'a>(
        &'a self,
        separator: &str,
        prefix: &str,
        pairs: &mut Vec<(String, &'a str)>,
    ) {
        for (key, node) in &self.nodes {
            let joined = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}{separator}{key}")
            };
            match node {
                Node::Leaf(value) => pairs.push((joined, value.as_str())),
                Node::Branch(subtree) => subtree.flatten_into(separator, &joined, pairs),
            }
        }
    }
}

impl Serialize for TranslationTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.nodes.len()))?;
        for (key, node) in &self.nodes {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Leaf(value) => serializer.serialize_str(value),
            Node::Branch(subtree) => subtree.serialize(serializer),
        }
    }
}
