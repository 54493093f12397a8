//! Headless runner: apply scoreboard commands read line by line.
//!
//! ```text
//! # two players on 20 and 7
//! add 20 Iceman
//! add 7 Gurra G
//! hit 0
//! ```
//!
//! Each applied command prints the session snapshot as one JSON line.
//! Blank lines and `#` comments are skipped.

use std::io::{BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, warn};

use crate::core::{Session, SessionSnapshot};
use crate::types::{GameAction, KILLER_THRESHOLD, MAX_NUMBER};

pub const USAGE: &str = "usage: killer-script [--threshold <1-20>] < commands.txt

commands:
  add <number> <name...>    add a player on a dart number
  hit <i>                   player i hit their number
  miss <i>                  take a point back from player i
  rename <i> <name...>      rename player i
  renumber <i> <number>     move player i to another number
  remove <i>                drop player i
  new                       new round, same players
  reset                     remove every player

players are addressed by join order, starting at 0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptConfig {
    pub threshold: u8,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            threshold: KILLER_THRESHOLD,
        }
    }
}

/// Parse command-line arguments (without the program name).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_script_args(args: &[String]) -> Result<Option<ScriptConfig>> {
    let mut cfg = ScriptConfig::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--threshold" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow!("--threshold needs a value"))?;
                let threshold: u8 = value
                    .parse()
                    .with_context(|| format!("invalid threshold {value:?}"))?;
                if !(1..=MAX_NUMBER).contains(&threshold) {
                    bail!("threshold must be between 1 and {MAX_NUMBER}, got {threshold}");
                }
                cfg.threshold = threshold;
            }
            other => bail!("unknown argument {other:?}\n\n{USAGE}"),
        }
    }
    Ok(Some(cfg))
}

/// Parse one script line. Blank lines and comments yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<GameAction>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let action = match verb {
        "add" => {
            let (number, name) = split_arg(rest, "add <number> <name>")?;
            GameAction::AddPlayer {
                number: parse_number(number)?,
                name: name.to_string(),
            }
        }
        "hit" => GameAction::Hit(parse_index(rest)?),
        "miss" => GameAction::Miss(parse_index(rest)?),
        "new" => no_args(rest, GameAction::NewGame)?,
        "reset" => no_args(rest, GameAction::ResetAll)?,
        "rename" => {
            let (index, name) = split_arg(rest, "rename <i> <name>")?;
            GameAction::ChangeName {
                index: parse_index(index)?,
                name: name.to_string(),
            }
        }
        "renumber" => {
            let (index, number) = split_arg(rest, "renumber <i> <number>")?;
            GameAction::ChangeNumber {
                index: parse_index(index)?,
                number: parse_number(number)?,
            }
        }
        "remove" => GameAction::RemovePlayer(parse_index(rest)?),
        other => bail!("unknown command {other:?}"),
    };
    Ok(Some(action))
}

/// Apply every command from `input`, writing one snapshot line per command.
///
/// Parse errors stop the run and name the offending line. Rejected roster
/// edits (taken number, empty name) are logged and the run continues.
pub fn run_script<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> Result<()> {
    let mut snap = SessionSnapshot::default();
    for (n, line) in input.lines().enumerate() {
        let line_no = n + 1;
        let line = line.with_context(|| format!("read line {line_no}"))?;
        let Some(action) = parse_line(&line).with_context(|| format!("line {line_no}"))? else {
            continue;
        };

        let verb = action.as_str();
        match session.try_apply(action) {
            Ok(changed) => debug!("line {}: {} (changed: {})", line_no, verb, changed),
            Err(e) => warn!("line {}: {} rejected: {}", line_no, verb, e),
        }

        session.snapshot_into(&mut snap);
        serde_json::to_writer(&mut out, &snap).context("write snapshot")?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

fn split_arg<'a>(rest: &'a str, usage: &str) -> Result<(&'a str, &'a str)> {
    rest.split_once(char::is_whitespace)
        .map(|(a, b)| (a, b.trim()))
        .filter(|(_, b)| !b.is_empty())
        .ok_or_else(|| anyhow!("expected `{usage}`"))
}

fn no_args(rest: &str, action: GameAction) -> Result<GameAction> {
    if !rest.is_empty() {
        bail!("`{}` takes no arguments", action.as_str());
    }
    Ok(action)
}

fn parse_index(s: &str) -> Result<usize> {
    s.parse()
        .with_context(|| format!("expected a player index, got {s:?}"))
}

fn parse_number(s: &str) -> Result<u8> {
    s.parse()
        .with_context(|| format!("expected a dart number, got {s:?}"))
}
