//! Turns navigator events into the text printed on stdout.

use nametree_core::config::settings::DisplayConfig;
use nametree_core::entry::format_timestamp_with;
use nametree_core::event::Event;
use nametree_core::nav::snapshot::{EntryKind, ListedEntry, TreeEntry};

/// Renders an event as one or more lines, without a trailing newline.
pub fn render_event(event: &Event, display: &DisplayConfig) -> String {
    match event {
        Event::Entered { name, .. } => format!("Entering folder: {name}"),
        Event::Ascended { path } => format!("Moving up to: {path}"),
        Event::AlreadyAtRoot => "Already at root.".to_string(),
        Event::Path(path) => format!("Current path: {path}"),
        Event::FolderCreated(name) => format!("Folder created: {name}"),
        Event::FileCreated(name) => format!("File created: {name}"),
        Event::CreationRejected { name, capacity } => {
            format!("Could not create {name}: folder is full ({capacity} items)")
        }
        Event::NotFound(name) => format!("Folder not found: {name}"),
        Event::NotAContainer(name) => format!("Not a folder: {name}"),
        Event::Listing { path, entries } => render_listing(path, entries, display),
        Event::Snapshot(rows) => render_tree(rows, display),
    }
}

fn render_listing(path: &str, entries: &[ListedEntry], display: &DisplayConfig) -> String {
    let mut lines = vec![format!("Contents of {path}:")];
    if entries.is_empty() {
        lines.push("  (empty)".to_string());
    }
    for entry in entries {
        let mut line = format!(" - {}", describe(&entry.name, entry.kind));
        if display.show_timestamps {
            line.push_str(&format!(
                ", created {}",
                format_timestamp_with(entry.created_at, &display.date_format)
            ));
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn render_tree(rows: &[TreeEntry], display: &DisplayConfig) -> String {
    rows.iter()
        .map(|row| {
            let indent = " ".repeat(row.depth * display.indent);
            match row.kind {
                EntryKind::Folder { .. } => format!("{indent}{}/", row.name),
                EntryKind::File { size_bytes } => format!("{indent}{} ({size_bytes} bytes)", row.name),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe(name: &str, kind: EntryKind) -> String {
    match kind {
        EntryKind::File { size_bytes } => format!("file {name} ({size_bytes} bytes)"),
        EntryKind::Folder { items } => format!("folder {name} ({items} items)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    fn display() -> DisplayConfig {
        DisplayConfig::default()
    }

    #[test]
    fn movement_messages() {
        let entered = Event::Entered {
            name: "Documentos".into(),
            path: "/root/Documentos".into(),
        };
        assert_eq!(render_event(&entered, &display()), "Entering folder: Documentos");
        assert_eq!(
            render_event(&Event::Ascended { path: "/root".into() }, &display()),
            "Moving up to: /root"
        );
        assert_eq!(render_event(&Event::AlreadyAtRoot, &display()), "Already at root.");
        assert_eq!(
            render_event(&Event::Path("/root".into()), &display()),
            "Current path: /root"
        );
    }

    #[test]
    fn creation_messages() {
        assert_eq!(
            render_event(&Event::FolderCreated("Fotos".into()), &display()),
            "Folder created: Fotos"
        );
        assert_eq!(
            render_event(&Event::FileCreated("nota.txt".into()), &display()),
            "File created: nota.txt"
        );
        let rejected = Event::CreationRejected {
            name: "sexto".into(),
            capacity: 5,
        };
        assert_eq!(
            render_event(&rejected, &display()),
            "Could not create sexto: folder is full (5 items)"
        );
    }

    #[test]
    fn lookup_failures() {
        assert_eq!(
            render_event(&Event::NotFound("nope".into()), &display()),
            "Folder not found: nope"
        );
        assert_eq!(
            render_event(&Event::NotAContainer("nota.txt".into()), &display()),
            "Not a folder: nota.txt"
        );
    }

    #[test]
    fn listing_shows_each_child() {
        let event = Event::Listing {
            path: "/root".into(),
            entries: vec![
                ListedEntry {
                    name: "doc.txt".into(),
                    kind: EntryKind::File { size_bytes: 1000 },
                    created_at: SystemTime::UNIX_EPOCH,
                },
                ListedEntry {
                    name: "Fotos".into(),
                    kind: EntryKind::Folder { items: 0 },
                    created_at: SystemTime::UNIX_EPOCH,
                },
            ],
        };
        assert_eq!(
            render_event(&event, &display()),
            "Contents of /root:\n - file doc.txt (1000 bytes)\n - folder Fotos (0 items)"
        );
    }

    #[test]
    fn listing_with_timestamps() {
        let event = Event::Listing {
            path: "/root".into(),
            entries: vec![ListedEntry {
                name: "a".into(),
                kind: EntryKind::File { size_bytes: 1 },
                created_at: SystemTime::UNIX_EPOCH,
            }],
        };
        let display = DisplayConfig {
            show_timestamps: true,
            date_format: "%Y-%m-%d".to_string(),
            ..DisplayConfig::default()
        };
        assert_eq!(
            render_event(&event, &display),
            "Contents of /root:\n - file a (1 bytes), created 1970-01-01"
        );
    }

    #[test]
    fn empty_listing() {
        let event = Event::Listing {
            path: "/root".into(),
            entries: vec![],
        };
        assert_eq!(render_event(&event, &display()), "Contents of /root:\n  (empty)");
    }

    #[test]
    fn tree_is_indented_by_depth() {
        let rows = vec![
            TreeEntry {
                name: "root".into(),
                kind: EntryKind::Folder { items: 1 },
                depth: 0,
            },
            TreeEntry {
                name: "nota.txt".into(),
                kind: EntryKind::File { size_bytes: 1024 },
                depth: 1,
            },
        ];
        let display = DisplayConfig {
            indent: 4,
            ..DisplayConfig::default()
        };
        assert_eq!(
            render_event(&Event::Snapshot(rows), &display),
            "root/\n    nota.txt (1024 bytes)"
        );
    }
}
