//! Command and event types between a driver and the navigator.
//!
//! A driver translates user input into [`Command`]s. The navigator runs
//! them via [`Navigator::execute`](crate::nav::Navigator::execute) and
//! answers with an [`Event`] the driver can render however it likes.

use crate::nav::snapshot::{ListedEntry, TreeEntry};

/// An action the driver asks the navigator to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move into the named child container.
    Enter(String),
    /// Move to the parent container.
    Ascend,
    /// Report the absolute path of the current container.
    ShowPath,
    /// Create a container in the current container.
    CreateFolder(String),
    /// Create a leaf in the current container.
    CreateFile { name: String, size_bytes: i64 },
    /// List the children of the current container.
    List,
    /// Walk the whole tree from the root.
    Snapshot,
}

/// The outcome of a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The cursor moved into a child container.
    Entered { name: String, path: String },
    /// The cursor moved to the parent container.
    Ascended { path: String },
    /// `Ascend` was issued at the root; nothing changed.
    AlreadyAtRoot,
    /// The current absolute path.
    Path(String),
    FolderCreated(String),
    FileCreated(String),
    /// The current container was full; `name` is the refused entry.
    CreationRejected { name: String, capacity: usize },
    /// No child with this name exists.
    NotFound(String),
    /// The name resolved to a leaf.
    NotAContainer(String),
    /// Children of the current container.
    Listing {
        path: String,
        entries: Vec<ListedEntry>,
    },
    /// Depth-first rows of the whole tree.
    Snapshot(Vec<TreeEntry>),
}

impl Event {
    /// Returns `true` for events that report a refused command.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Event::CreationRejected { .. } | Event::NotFound(_) | Event::NotAContainer(_)
        )
    }
}
