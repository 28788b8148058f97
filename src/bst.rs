/// Unbalanced binary search tree keyed by byte-wise string order.
///
/// Nodes live in a per-tree arena and link to their children by index, so
/// dropping a tree is a flat pass over the arena. Insert and find descend
/// with a loop, and traversals use an explicit stack: a degenerate tree built
/// from sorted input costs O(n) steps but never deepens the call stack.
///
/// No rebalancing happens. Inserting a key that is already present leaves
/// the tree untouched, so the first value stored under a key is the one
/// that stays.
use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::stats::Stats;

type NodeId = usize;

/// A flagged word and its optional replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    key: String,
    value: Option<String>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Node {
    pub fn new(key: &str, value: Option<&str>) -> Result<Self> {
        Ok(Node {
            key: copy_str(key)?,
            value: value.map(copy_str).transpose()?,
            left: None,
            right: None,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// `None` means the word is flagged with no replacement.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{} -> {}", self.key, v),
            None => f.write_str(&self.key),
        }
    }
}

fn copy_str(s: &str) -> Result<String> {
    let mut out = String::new();
    out.try_reserve_exact(s.len()).map_err(|_| Error::Alloc {
        what: "node string",
        bytes: s.len(),
    })?;
    out.push_str(s);
    Ok(out)
}

#[derive(Debug, Default, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Tree::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert `key` unless it is already present. Returns whether a node was
    /// added. Every left/right step bumps `stats.branches`.
    pub fn insert(&mut self, key: &str, value: Option<&str>, stats: &mut Stats) -> Result<bool> {
        let Some(mut cur) = self.root else {
            let id = self.alloc(key, value)?;
            self.root = Some(id);
            return Ok(true);
        };
        loop {
            let node = &self.nodes[cur];
            let ord = key.cmp(node.key.as_str());
            let child = match ord {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Ok(false),
            };
            stats.branches += 1;
            match child {
                Some(next) => cur = next,
                None => {
                    let id = self.alloc(key, value)?;
                    let parent = &mut self.nodes[cur];
                    if ord == Ordering::Less {
                        parent.left = Some(id);
                    } else {
                        parent.right = Some(id);
                    }
                    return Ok(true);
                }
            }
        }
    }

    pub fn find(&self, key: &str, stats: &mut Stats) -> Option<&Node> {
        let mut cur = self.root;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            cur = match key.cmp(node.key.as_str()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(node),
            };
            stats.branches += 1;
        }
        None
    }

    /// Node count. Every arena slot is linked into the tree.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Longest root-to-leaf path in nodes; 0 for an empty tree.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            max = max.max(depth);
            let node = &self.nodes[id];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max
    }

    /// Nodes in ascending key order.
    pub fn iter(&self) -> InOrder<'_> {
        let mut it = InOrder {
            nodes: &self.nodes,
            stack: Vec::new(),
        };
        it.push_left(self.root);
        it
    }

    /// Write each node on its own line, in key order.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for node in self.iter() {
            writeln!(out, "{node}")?;
        }
        Ok(())
    }

    /// Drop every node, leaving an empty tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    fn alloc(&mut self, key: &str, value: Option<&str>) -> Result<NodeId> {
        let node = Node::new(key, value)?;
        self.nodes.try_reserve(1).map_err(|_| Error::Alloc {
            what: "tree node",
            bytes: std::mem::size_of::<Node>(),
        })?;
        self.nodes.push(node);
        Ok(self.nodes.len() - 1)
    }
}

pub struct InOrder<'a> {
    nodes: &'a [Node],
    stack: Vec<NodeId>,
}

impl<'a> InOrder<'a> {
    fn push_left(&mut self, mut cur: Option<NodeId>) {
        while let Some(id) = cur {
            self.stack.push(id);
            cur = self.nodes[id].left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let id = self.stack.pop()?;
        let node = &self.nodes[id];
        self.push_left(node.right);
        Some(node)
    }
}
