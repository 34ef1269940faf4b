use anyhow::{anyhow, bail, Context};
use nametree_core::event::Command;

/// Actions that can result from one line of script input.
#[derive(Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Dispatch a core Command.
    Command(Command),
    /// Print the whole tree as JSON.
    Export,
    /// Stop reading input.
    Quit,
    /// Blank line or comment.
    None,
}

/// Parses one script line.
///
/// The verb is the first word. Names take the rest of the line, so they may
/// contain spaces; for `touch` the last word is the size. A `#` starts a
/// comment only at the start of the line or after whitespace.
pub fn parse_line(line: &str) -> anyhow::Result<InputAction> {
    let line = strip_comment(line).trim();
    if line.is_empty() {
        return Ok(InputAction::None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let action = match verb {
        "mkdir" => InputAction::Command(Command::CreateFolder(required_name(verb, rest)?)),
        "touch" => {
            let (name, size) = rest
                .rsplit_once(char::is_whitespace)
                .ok_or_else(|| anyhow!("usage: touch <name> <size>"))?;
            let size_bytes = size
                .parse::<i64>()
                .with_context(|| format!("invalid size: {size}"))?;
            InputAction::Command(Command::CreateFile {
                name: required_name(verb, name.trim())?,
                size_bytes,
            })
        }
        "cd" if rest == ".." => InputAction::Command(Command::Ascend),
        "cd" => InputAction::Command(Command::Enter(required_name(verb, rest)?)),
        "up" => no_args(verb, rest, Command::Ascend)?,
        "pwd" => no_args(verb, rest, Command::ShowPath)?,
        "ls" => no_args(verb, rest, Command::List)?,
        "tree" => no_args(verb, rest, Command::Snapshot)?,
        "export" if rest.is_empty() => InputAction::Export,
        "quit" | "exit" if rest.is_empty() => InputAction::Quit,
        "export" | "quit" | "exit" => bail!("{verb} takes no arguments"),
        other => bail!("unknown command: {other}"),
    };
    Ok(action)
}

fn strip_comment(line: &str) -> &str {
    let mut prev_is_space = true;
    for (i, c) in line.char_indices() {
        if c == '#' && prev_is_space {
            return &line[..i];
        }
        prev_is_space = c.is_whitespace();
    }
    line
}

fn required_name(verb: &str, rest: &str) -> anyhow::Result<String> {
    if rest.is_empty() {
        bail!("{verb} needs a name");
    }
    Ok(rest.to_string())
}

fn no_args(verb: &str, rest: &str, command: Command) -> anyhow::Result<InputAction> {
    if !rest.is_empty() {
        bail!("{verb} takes no arguments");
    }
    Ok(InputAction::Command(command))
}
