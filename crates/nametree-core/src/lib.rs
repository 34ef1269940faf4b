//! nametree core library: a bounded naming tree with a navigation cursor.
//!
//! `nametree-core` holds the tree model and the navigator independently of
//! any frontend, so the demo CLI and tests drive the same logic.
//!
//! # Modules
//!
//! - [`entry`] — [`Entry`] variants ([`Leaf`], [`Container`]) and their constructors.
//! - [`tree`] — [`Tree`], the arena that owns every entry, addressed by [`NodeId`].
//! - [`nav`] — [`Navigator`], the current-position cursor, plus listing and snapshot views.
//! - [`event`] — [`Command`] and [`Event`] types for driver ↔ core communication.
//! - [`config`] — TOML-based settings.
//! - [`error`] — Unified error type ([`TreeError`]) and result alias ([`TreeResult`]).

pub mod config;
pub mod entry;
pub mod error;
pub mod event;
pub mod nav;
pub mod tree;

pub use config::settings::Config;
pub use entry::{make_container, make_leaf, Container, Entry, EntryMeta, Leaf, MAX_ELEMENTOS};
pub use error::{TreeError, TreeResult};
pub use event::{Command, Event};
pub use nav::snapshot::{EntryKind, ListedEntry, TreeEntry};
pub use nav::Navigator;
pub use tree::{NodeId, Tree};

/// Folds a name for case-insensitive comparison.
///
/// The name is normalised to NFC first so that a decomposed spelling
/// (as macOS stores filenames) matches its composed form. Characters are
/// lowercased one at a time, so no context-sensitive rule (Greek final
/// sigma) applies.
pub fn fold_name(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().flat_map(char::to_lowercase).collect()
}
