//! Arena that owns every entry of a naming tree.
//!
//! Entries live in a flat `Vec` and refer to each other through [`NodeId`]
//! indices. Ownership is the arena's alone: a container's parent link is
//! only used to walk upwards and never keeps anything alive.

use crate::entry::{make_container, Container, Entry, MAX_ELEMENTOS};
use crate::error::{TreeError, TreeResult};
use crate::fold_name;

/// Index of an entry inside its [`Tree`].
///
/// Ids are only meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A capacity-bounded tree of named entries.
///
/// The root container is created with the tree and has no parent. Every
/// container in the tree shares the same child capacity.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Entry>,
    capacity: usize,
}

impl Tree {
    /// Creates a tree holding only a root container called `root_name`.
    pub fn new(root_name: impl Into<String>, capacity: usize) -> Self {
        let root = make_container(root_name, None);
        Self {
            nodes: vec![Entry::Container(root)],
            capacity,
        }
    }

    /// Creates a tree with the default [`MAX_ELEMENTOS`] capacity.
    pub fn with_default_capacity(root_name: impl Into<String>) -> Self {
        Self::new(root_name, MAX_ELEMENTOS)
    }

    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Maximum number of children per container.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total number of entries, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Entry> {
        self.nodes.get(id.0)
    }

    /// Returns the container at `id`, or `None` if `id` is a leaf or unknown.
    pub fn container(&self, id: NodeId) -> Option<&Container> {
        self.get(id).and_then(Entry::as_container)
    }

    /// Returns the parent of the container at `id`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.container(id).and_then(Container::parent)
    }

    /// Returns the children of `id` in insertion order. Empty for leaves.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.container(id).map(Container::children).unwrap_or(&[])
    }

    /// Appends `entry` to the container at `id` if it has room.
    ///
    /// Returns `false` without touching the tree when the container is
    /// full or `id` is not a container. A rejected entry is dropped.
    pub fn add_child(&mut self, id: NodeId, entry: impl Into<Entry>) -> bool {
        self.try_add_child(id, entry).is_ok()
    }

    /// Like [`Tree::add_child`] but reports why an insertion was refused.
    ///
    /// An inserted container has its parent link pointed at `id`, so the
    /// parent always lists the child.
    ///
    /// # Errors
    ///
    /// - [`TreeError::NotFound`] if `id` does not belong to this tree.
    /// - [`TreeError::NotAContainer`] if `id` is a leaf.
    /// - [`TreeError::ContainerFull`] if the container is at capacity.
    pub fn try_add_child(&mut self, id: NodeId, entry: impl Into<Entry>) -> TreeResult<NodeId> {
        let capacity = self.capacity;
        let child_id = NodeId::new(self.nodes.len());
        let parent = self
            .nodes
            .get(id.0)
            .ok_or_else(|| TreeError::NotFound(format!("#{}", id.0)))?;
        let container = parent
            .as_container()
            .ok_or_else(|| TreeError::NotAContainer(parent.name().to_string()))?;
        if container.len() >= capacity {
            return Err(TreeError::ContainerFull {
                name: container.meta().name().to_string(),
                capacity,
            });
        }

        let mut entry: Entry = entry.into();
        if let Some(child) = entry.as_container_mut() {
            child.set_parent(id);
        }
        self.nodes.push(entry);
        if let Some(container) = self.nodes[id.0].as_container_mut() {
            container.push_child(child_id);
        }
        Ok(child_id)
    }

    /// Finds the first child of `id` whose name matches `name`,
    /// ignoring case. Returns `None` if nothing matches.
    pub fn find_child(&self, id: NodeId, name: &str) -> Option<NodeId> {
        let wanted = fold_name(name);
        self.children(id).iter().copied().find(|child| {
            self.get(*child)
                .is_some_and(|entry| fold_name(entry.name()) == wanted)
        })
    }

    /// Renders the absolute path of the container `id` as `/root/.../name`.
    ///
    /// Walks parent links upwards, so the cost is proportional to depth.
    /// Leaves carry no parent link, so a leaf or unknown id yields an
    /// empty string.
    pub fn path_of(&self, id: NodeId) -> String {
        if self.container(id).is_none() {
            return String::new();
        }

        let mut names = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let Some(entry) = self.get(current) else {
                break;
            };
            names.push(entry.name());
            cursor = entry.as_container().and_then(Container::parent);
        }

        names.iter().rev().fold(String::new(), |mut path, name| {
            path.push('/');
            path.push_str(name);
            path
        })
    }

    /// Returns the number of containers between `id` and the root.
    pub fn depth_of(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut cursor = self.parent(id);
        while let Some(parent) = cursor {
            depth += 1;
            cursor = self.parent(parent);
        }
        depth
    }
}
