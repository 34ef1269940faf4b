//! Directory-like cursor over a naming tree.
//!
//! [`Navigator`] owns a [`Tree`] and a "current container" cursor. Movement
//! (`enter`, `ascend`) and creation (`create_folder`, `create_file`) are
//! always relative to that cursor. The boolean operations never fail
//! loudly; the `try_*` variants say why something was refused.

use crate::config::settings::TreeConfig;
use crate::entry::{make_container, make_leaf};
use crate::error::{TreeError, TreeResult};
use crate::event::{Command, Event};
use crate::nav::snapshot::{self, ListedEntry, TreeEntry};
use crate::tree::{NodeId, Tree};

/// A naming tree together with the current-position cursor.
///
/// The cursor always designates a container. A failed operation leaves
/// both the tree and the cursor untouched.
#[derive(Debug, Clone)]
pub struct Navigator {
    tree: Tree,
    current: NodeId,
}

impl Navigator {
    /// Creates a navigator over a fresh tree whose root is `root_name`.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self::from_tree(Tree::with_default_capacity(root_name))
    }

    /// Creates a navigator whose containers hold at most `capacity` children.
    pub fn with_capacity(root_name: impl Into<String>, capacity: usize) -> Self {
        Self::from_tree(Tree::new(root_name, capacity))
    }

    pub fn from_config(config: &TreeConfig) -> Self {
        Self::with_capacity(config.root_name.clone(), config.capacity)
    }

    fn from_tree(tree: Tree) -> Self {
        let current = tree.root();
        Self { tree, current }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    pub fn is_at_root(&self) -> bool {
        self.current == self.tree.root()
    }

    /// Moves into the child container called `name` (case-insensitive).
    ///
    /// # Errors
    ///
    /// - [`TreeError::NotFound`] if no child has that name.
    /// - [`TreeError::NotAContainer`] if the first match is a leaf.
    pub fn try_enter(&mut self, name: &str) -> TreeResult<NodeId> {
        let child = self
            .tree
            .find_child(self.current, name)
            .ok_or_else(|| TreeError::NotFound(name.to_string()))?;
        if self.tree.container(child).is_none() {
            return Err(TreeError::NotAContainer(name.to_string()));
        }
        self.current = child;
        tracing::debug!(name, path = %self.current_path(), "entered container");
        Ok(child)
    }

    /// Moves into the child container called `name`.
    ///
    /// Returns `false` and stays put if the name is unknown or a leaf.
    pub fn enter(&mut self, name: &str) -> bool {
        match self.try_enter(name) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(name, error = %e, "enter refused");
                false
            }
        }
    }

    /// Moves to the parent container. No-op at the root.
    pub fn ascend(&mut self) {
        match self.tree.parent(self.current) {
            Some(parent) => {
                self.current = parent;
                tracing::debug!(path = %self.current_path(), "ascended");
            }
            None => tracing::debug!("ascend at root ignored"),
        }
    }

    /// Returns the absolute path of the current container, e.g. `/root/Documentos`.
    pub fn current_path(&self) -> String {
        self.tree.path_of(self.current)
    }

    /// Creates an empty container called `name` inside the current one.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ContainerFull`] if the current container is at capacity.
    pub fn try_create_folder(&mut self, name: &str) -> TreeResult<NodeId> {
        let folder = make_container(name, Some(self.current));
        let result = self.tree.try_add_child(self.current, folder);
        self.log_creation("folder", name, &result);
        result
    }

    /// Creates a container in the current one. Returns `false` when full.
    pub fn create_folder(&mut self, name: &str) -> bool {
        self.try_create_folder(name).is_ok()
    }

    /// Creates a leaf called `name` with `size_bytes` inside the current container.
    ///
    /// Any size is accepted, including zero and negative values.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ContainerFull`] if the current container is at capacity.
    pub fn try_create_file(&mut self, name: &str, size_bytes: i64) -> TreeResult<NodeId> {
        let file = make_leaf(name, size_bytes);
        let result = self.tree.try_add_child(self.current, file);
        self.log_creation("file", name, &result);
        result
    }

    /// Creates a leaf in the current container. Returns `false` when full.
    pub fn create_file(&mut self, name: &str, size_bytes: i64) -> bool {
        self.try_create_file(name, size_bytes).is_ok()
    }

    fn log_creation(&self, kind: &str, name: &str, result: &TreeResult<NodeId>) {
        match result {
            Ok(_) => tracing::debug!(kind, name, path = %self.current_path(), "created entry"),
            Err(e) => tracing::warn!(
                kind,
                name,
                path = %self.current_path(),
                error = %e,
                "creation rejected"
            ),
        }
    }

    /// Lists the children of the current container in insertion order.
    pub fn list(&self) -> Vec<ListedEntry> {
        snapshot::collect_listing(&self.tree, self.current)
    }

    /// Walks the whole tree from the root, depth-first.
    pub fn snapshot(&self) -> Vec<TreeEntry> {
        snapshot::collect_tree(&self.tree, self.tree.root())
    }

    /// Renders [`Navigator::snapshot`] as JSON.
    pub fn snapshot_json(&self) -> TreeResult<String> {
        snapshot::to_json(&self.snapshot())
    }

    /// Runs `command` and reports what happened.
    pub fn execute(&mut self, command: Command) -> Event {
        match command {
            Command::Enter(name) => match self.try_enter(&name) {
                Ok(_) => Event::Entered {
                    name,
                    path: self.current_path(),
                },
                Err(e) => failure_event(name, e),
            },
            Command::Ascend => {
                if self.is_at_root() {
                    Event::AlreadyAtRoot
                } else {
                    self.ascend();
                    Event::Ascended {
                        path: self.current_path(),
                    }
                }
            }
            Command::ShowPath => Event::Path(self.current_path()),
            Command::CreateFolder(name) => match self.try_create_folder(&name) {
                Ok(_) => Event::FolderCreated(name),
                Err(e) => failure_event(name, e),
            },
            Command::CreateFile { name, size_bytes } => {
                match self.try_create_file(&name, size_bytes) {
                    Ok(_) => Event::FileCreated(name),
                    Err(e) => failure_event(name, e),
                }
            }
            Command::List => Event::Listing {
                path: self.current_path(),
                entries: self.list(),
            },
            Command::Snapshot => Event::Snapshot(self.snapshot()),
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::from_config(&TreeConfig::default())
    }
}

/// Maps a refused operation on `name` to the event a driver reports.
fn failure_event(name: String, error: TreeError) -> Event {
    match error {
        TreeError::ContainerFull { capacity, .. } => Event::CreationRejected { name, capacity },
        TreeError::NotAContainer(_) => Event::NotAContainer(name),
        _ => Event::NotFound(name),
    }
}
