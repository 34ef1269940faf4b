//! Flat views of a naming tree.
//!
//! [`ListedEntry`] describes the direct children of one container.
//! [`TreeEntry`] is one row of a depth-first walk over the whole tree.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::error::TreeResult;
use crate::tree::{NodeId, Tree};

/// What kind of entry a row describes, with its kind-specific attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryKind {
    File { size_bytes: i64 },
    Folder { items: usize },
}

impl EntryKind {
    fn of(entry: &Entry) -> Self {
        match entry {
            Entry::Leaf(leaf) => EntryKind::File {
                size_bytes: leaf.size_bytes(),
            },
            Entry::Container(container) => EntryKind::Folder {
                items: container.len(),
            },
        }
    }

    pub fn is_folder(self) -> bool {
        matches!(self, EntryKind::Folder { .. })
    }
}

/// A direct child of a container, as shown by a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    pub kind: EntryKind,
    pub created_at: SystemTime,
}

/// A single row of a whole-tree snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// Entry name as stored.
    pub name: String,
    #[serde(flatten)]
    pub kind: EntryKind,
    /// Nesting depth (0 = the root itself).
    pub depth: usize,
}

/// Lists the children of `id` in insertion order.
pub fn collect_listing(tree: &Tree, id: NodeId) -> Vec<ListedEntry> {
    tree.children(id)
        .iter()
        .filter_map(|child| tree.get(*child))
        .map(|entry| ListedEntry {
            name: entry.name().to_string(),
            kind: EntryKind::of(entry),
            created_at: entry.created_at(),
        })
        .collect()
}

/// Walks the tree depth-first from `id`, children in insertion order.
///
/// `id` itself is the first row, at depth 0.
pub fn collect_tree(tree: &Tree, id: NodeId) -> Vec<TreeEntry> {
    let mut rows = Vec::new();
    let mut stack = vec![(id, 0usize)];

    while let Some((current, depth)) = stack.pop() {
        let Some(entry) = tree.get(current) else {
            continue;
        };
        rows.push(TreeEntry {
            name: entry.name().to_string(),
            kind: EntryKind::of(entry),
            depth,
        });
        for child in tree.children(current).iter().rev() {
            stack.push((*child, depth + 1));
        }
    }

    rows
}

/// Renders snapshot rows as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`TreeError::Export`](crate::error::TreeError::Export) if
/// serialisation fails.
pub fn to_json(rows: &[TreeEntry]) -> TreeResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}
