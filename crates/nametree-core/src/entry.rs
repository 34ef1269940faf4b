//! Entry representation.
//!
//! An [`Entry`] is either a [`Leaf`] (file-like, carries a size) or a
//! [`Container`] (folder-like, carries ordered children and a parent link).
//! Both variants embed the same [`EntryMeta`] by value.
//!
//! Entries never own each other. Children and parents are [`NodeId`]s into
//! the [`Tree`](crate::tree::Tree) arena that owns every entry.

use std::fmt;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use crate::tree::NodeId;

/// Maximum number of children a container holds unless configured otherwise.
pub const MAX_ELEMENTOS: usize = 5;

/// Name and creation time shared by every entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMeta {
    name: String,
    created_at: SystemTime,
}

impl EntryMeta {
    fn now(name: String) -> Self {
        Self {
            name,
            created_at: SystemTime::now(),
        }
    }

    /// Returns the name exactly as it was given at creation.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }
}

/// A terminal entry with a size attribute and no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    meta: EntryMeta,
    size_bytes: i64,
}

impl Leaf {
    pub fn meta(&self) -> &EntryMeta {
        &self.meta
    }

    /// Returns the size in bytes. Zero and negative sizes are stored as given.
    pub fn size_bytes(&self) -> i64 {
        self.size_bytes
    }
}

/// An interior entry holding an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    meta: EntryMeta,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Container {
    pub fn meta(&self) -> &EntryMeta {
        &self.meta
    }

    /// Returns the owning container, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}

/// A node in the naming tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Leaf(Leaf),
    Container(Container),
}

impl Entry {
    pub fn meta(&self) -> &EntryMeta {
        match self {
            Entry::Leaf(leaf) => &leaf.meta,
            Entry::Container(container) => &container.meta,
        }
    }

    pub fn name(&self) -> &str {
        self.meta().name()
    }

    pub fn created_at(&self) -> SystemTime {
        self.meta().created_at()
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Entry::Container(_))
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Entry::Leaf(leaf) => Some(leaf),
            Entry::Container(_) => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Entry::Container(container) => Some(container),
            Entry::Leaf(_) => None,
        }
    }

    pub(crate) fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Entry::Container(container) => Some(container),
            Entry::Leaf(_) => None,
        }
    }
}

impl From<Leaf> for Entry {
    fn from(leaf: Leaf) -> Self {
        Entry::Leaf(leaf)
    }
}

impl From<Container> for Entry {
    fn from(container: Container) -> Self {
        Entry::Container(container)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Leaf(leaf) => write!(
                f,
                "file {} ({} bytes, created {})",
                leaf.meta.name,
                leaf.size_bytes,
                format_timestamp(leaf.meta.created_at)
            ),
            Entry::Container(container) => write!(
                f,
                "folder {} ({} items, created {})",
                container.meta.name,
                container.children.len(),
                format_timestamp(container.meta.created_at)
            ),
        }
    }
}

/// Builds a leaf stamped with the current time. No validation is applied.
pub fn make_leaf(name: impl Into<String>, size_bytes: i64) -> Leaf {
    Leaf {
        meta: EntryMeta::now(name.into()),
        size_bytes,
    }
}

/// Builds an empty container. `parent` is `None` only for the root.
pub fn make_container(name: impl Into<String>, parent: Option<NodeId>) -> Container {
    Container {
        meta: EntryMeta::now(name.into()),
        parent,
        children: Vec::new(),
    }
}

/// Format used by [`format_timestamp`] and the `Display` impl.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Formats a timestamp as a UTC calendar date.
pub fn format_timestamp(time: SystemTime) -> String {
    format_timestamp_with(time, DEFAULT_TIMESTAMP_FORMAT)
}

/// Formats a timestamp in UTC with a strftime-style `format`.
///
/// Falls back to [`DEFAULT_TIMESTAMP_FORMAT`] if `format` is invalid.
pub fn format_timestamp_with(time: SystemTime, format: &str) -> String {
    use std::fmt::Write;

    let datetime: DateTime<Utc> = time.into();
    let mut out = String::new();
    if write!(out, "{}", datetime.format(format)).is_err() {
        out.clear();
        let _ = write!(out, "{}", datetime.format(DEFAULT_TIMESTAMP_FORMAT));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn make_leaf_keeps_name_and_size() {
        let leaf = make_leaf("nota.txt", 1024);
        assert_eq!(leaf.meta().name(), "nota.txt");
        assert_eq!(leaf.size_bytes(), 1024);
    }

    #[test]
    fn make_leaf_accepts_zero_and_negative_sizes() {
        assert_eq!(make_leaf("empty", 0).size_bytes(), 0);
        assert_eq!(make_leaf("odd", -7).size_bytes(), -7);
    }

    #[test]
    fn make_leaf_stamps_creation_time() {
        let before = SystemTime::now();
        let leaf = make_leaf("a", 1);
        let after = SystemTime::now();
        assert!(leaf.meta().created_at() >= before);
        assert!(leaf.meta().created_at() <= after);
    }

    #[test]
    fn make_container_starts_empty() {
        let container = make_container("root", None);
        assert!(container.is_empty());
        assert_eq!(container.len(), 0);
        assert!(container.parent().is_none());
    }

    #[test]
    fn make_container_records_parent() {
        let container = make_container("Fotos", Some(NodeId::new(3)));
        assert_eq!(container.parent(), Some(NodeId::new(3)));
    }

    #[test]
    fn name_is_stored_as_given() {
        let entry = Entry::from(make_container("MiXeD", None));
        assert_eq!(entry.name(), "MiXeD");
    }

    #[test]
    fn variant_accessors() {
        let leaf = Entry::from(make_leaf("a.txt", 1));
        let folder = Entry::from(make_container("dir", None));

        assert!(!leaf.is_container());
        assert!(leaf.as_leaf().is_some());
        assert!(leaf.as_container().is_none());

        assert!(folder.is_container());
        assert!(folder.as_container().is_some());
        assert!(folder.as_leaf().is_none());
    }

    #[test]
    fn display_leaf() {
        let entry = Entry::from(make_leaf("doc.txt", 1000));
        let text = entry.to_string();
        assert!(text.starts_with("file doc.txt (1000 bytes, created "));
        assert!(text.ends_with(" UTC)"));
    }

    #[test]
    fn display_container_counts_children() {
        let mut container = make_container("root", None);
        container.push_child(NodeId::new(1));
        container.push_child(NodeId::new(2));
        let text = Entry::from(container).to_string();
        assert!(text.starts_with("folder root (2 items, created "));
    }

    #[test]
    fn format_timestamp_at_epoch() {
        assert_eq!(
            format_timestamp(SystemTime::UNIX_EPOCH),
            "1970-01-01 00:00:00 UTC"
        );
    }

    #[test]
    fn format_timestamp_is_a_calendar_date() {
        let t = SystemTime::UNIX_EPOCH + Duration::from_secs(2 * 86400 + 3661);
        assert_eq!(format_timestamp(t), "1970-01-03 01:01:01 UTC");
    }

    #[test]
    fn format_timestamp_before_epoch() {
        let t = SystemTime::UNIX_EPOCH - Duration::from_secs(10);
        assert_eq!(format_timestamp(t), "1969-12-31 23:59:50 UTC");
    }

    #[test]
    fn format_timestamp_with_custom_format() {
        let t = SystemTime::UNIX_EPOCH + Duration::from_secs(86400);
        assert_eq!(format_timestamp_with(t, "%d/%m/%Y"), "02/01/1970");
    }

    #[test]
    fn format_timestamp_with_invalid_format_falls_back() {
        assert_eq!(
            format_timestamp_with(SystemTime::UNIX_EPOCH, "%Q"),
            "1970-01-01 00:00:00 UTC"
        );
    }
}
