//! nametree — drive a bounded naming tree from the command line.
//!
//! `nametree demo` replays a fixed walkthrough. `nametree run [SCRIPT]`
//! reads commands line by line from a file or stdin. Events go to stdout,
//! diagnostics and logs to stderr.

mod demo;
mod input;
mod render;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nametree_core::config::settings::DisplayConfig;
use nametree_core::{Config, Navigator};

use crate::input::{parse_line, InputAction};
use crate::render::render_event;

/// nametree - a bounded naming tree with a navigation cursor.
#[derive(Parser)]
#[command(name = "nametree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the built-in walkthrough.
    Demo,

    /// Run commands from a script file, or stdin when omitted.
    Run {
        /// Script with one command per line.
        script: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("NAMETREE_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let mut nav = Navigator::from_config(&config.tree);
    tracing::info!(
        root = %config.tree.root_name,
        capacity = config.tree.capacity,
        "navigator ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Some(Commands::Demo) => run_demo(&mut nav, &mut out, &config.display),
        Some(Commands::Run {
            script: Some(path),
        }) => {
            let file =
                File::open(&path).with_context(|| format!("opening script {}", path.display()))?;
            run_script(&mut nav, BufReader::new(file), &mut out, &config.display)
        }
        Some(Commands::Run { script: None }) | None => {
            run_script(&mut nav, io::stdin().lock(), &mut out, &config.display)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            Config::load(path).with_context(|| format!("loading config {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

fn run_demo(nav: &mut Navigator, out: &mut impl Write, display: &DisplayConfig) -> Result<()> {
    for command in demo::demo_commands() {
        let event = nav.execute(command);
        writeln!(out, "{}", render_event(&event, display))?;
    }
    Ok(())
}

/// Executes every line of `reader`, printing one rendering per event.
///
/// Malformed lines are reported on stderr with their line number and skipped.
fn run_script(
    nav: &mut Navigator,
    reader: impl BufRead,
    out: &mut impl Write,
    display: &DisplayConfig,
) -> Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::warn!(line = index + 1, error = %e, "skipping unreadable script line");
                eprintln!("line {}: {e}", index + 1);
                continue;
            }
            Err(e) => return Err(e).context("reading script"),
        };
        let action = match parse_line(&line) {
            Ok(action) => action,
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "skipping script line");
                eprintln!("line {}: {e}", index + 1);
                continue;
            }
        };

        match action {
            InputAction::Command(command) => {
                let event = nav.execute(command);
                writeln!(out, "{}", render_event(&event, display))?;
            }
            InputAction::Export => writeln!(out, "{}", nav.snapshot_json()?)?,
            InputAction::Quit => break,
            InputAction::None => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(script: &str) -> (Navigator, String) {
        let mut nav = Navigator::default();
        let mut out = Vec::new();
        run_script(
            &mut nav,
            script.as_bytes(),
            &mut out,
            &DisplayConfig::default(),
        )
        .unwrap();
        (nav, String::from_utf8(out).unwrap())
    }

    #[test]
    fn script_prints_one_line_per_event() {
        let (nav, out) = run("mkdir Documentos\ncd documentos\npwd\n");
        assert_eq!(
            out,
            "Folder created: Documentos\nEntering folder: documentos\nCurrent path: /root/Documentos\n"
        );
        assert!(!nav.is_at_root());
    }

    #[test]
    fn script_skips_bad_lines() {
        let (_, out) = run("bogus\nmkdir\npwd\n");
        assert_eq!(out, "Current path: /root\n");
    }

    #[test]
    fn script_skips_non_utf8_line() {
        let mut nav = Navigator::default();
        let mut out = Vec::new();
        run_script(
            &mut nav,
            &b"mkdir a\n\xff\xfe\npwd\n"[..],
            &mut out,
            &DisplayConfig::default(),
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Folder created: a\nCurrent path: /root\n"
        );
    }

    #[test]
    fn script_stops_at_quit() {
        let (nav, out) = run("mkdir a\nquit\nmkdir b\n");
        assert_eq!(out, "Folder created: a\n");
        assert_eq!(nav.list().len(), 1);
    }

    #[test]
    fn script_reports_full_folder() {
        let script = (0..6)
            .map(|i| format!("touch f{i} {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let (_, out) = run(&script);
        assert!(out.ends_with("Could not create f5: folder is full (5 items)\n"));
    }

    #[test]
    fn script_export_prints_json() {
        let (_, out) = run("touch nota.txt 1024\nexport\n");
        assert!(out.contains("\"name\": \"nota.txt\""));
        assert!(out.contains("\"size_bytes\": 1024"));
    }

    #[test]
    fn demo_transcript_matches_walkthrough() {
        let mut nav = Navigator::default();
        let mut out = Vec::new();
        run_demo(&mut nav, &mut out, &DisplayConfig::default()).unwrap();
        let out = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Current path: /root");
        assert!(lines.contains(&"Current path: /root/Documentos/Fotos"));
        assert!(lines.contains(&"Moving up to: /root/Documentos"));
        assert!(lines.contains(&"Already at root."));
    }

    #[test]
    fn load_config_defaults_without_path() {
        let config = load_config(None).unwrap();
        assert_eq!(config.tree.root_name, "root");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nametree.toml");
        fs::write(&path, "[tree]\nroot_name = \"raiz\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.tree.root_name, "raiz");
    }

    #[test]
    fn load_config_missing_file_has_context() {
        let tmp = TempDir::new().unwrap();
        let err = load_config(Some(&tmp.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().starts_with("loading config"));
    }

    #[test]
    fn cli_parses_demo_and_config() {
        let cli = Cli::try_parse_from(["nametree", "--config", "x.toml", "demo"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert!(matches!(cli.command, Some(Commands::Demo)));
    }

    #[test]
    fn cli_defaults_to_stdin_script() {
        let cli = Cli::try_parse_from(["nametree"]).unwrap();
        assert!(cli.command.is_none());
    }
}
