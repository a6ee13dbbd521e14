//! Headless adapter: turns a plain-text event script into reconciler
//! messages, the way a browser shim would forward scroll and click events.
//!
//! One event per line:
//!
//! ```text
//! viewport 900 2400
//! scroll 750
//! frame
//! lang fa
//! click nav-features
//! ```
//!
//! Blank lines are skipped. A `#` at the start of a line or after whitespace
//! opens a comment; inside a token (`click #features`) it is kept.

use crate::app::{App, Message};
use crate::host::PageHost;
use anyhow::{Context, Result, anyhow, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

static RE_EVENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<cmd>[A-Za-z]+)(?:\s+(?P<args>.*?))?\s*$").unwrap());

/// Parse one script line; `Ok(None)` for blanks and comments.
pub fn parse_event_line(line: &str) -> Result<Option<Message>> {
    let line = strip_comment(line).trim();
    if line.is_empty() {
        return Ok(None);
    }
    let caps = RE_EVENT
        .captures(line)
        .ok_or_else(|| anyhow!("unrecognized event: {line:?}"))?;
    let cmd = caps["cmd"].to_ascii_lowercase();
    let args: Vec<&str> = caps
        .name("args")
        .map(|m| m.as_str().split_whitespace().collect())
        .unwrap_or_default();

    let message = match (cmd.as_str(), args.as_slice()) {
        ("scroll", [offset]) => Message::Scrolled {
            offset: parse_px(offset)?,
        },
        ("frame", []) => Message::AnimationFrame,
        ("viewport", [viewport, content]) => Message::ViewportChanged {
            viewport_height: parse_px(viewport)?,
            content_height: parse_px(content)?,
        },
        ("lang", [code]) => Message::LanguageSelected((*code).to_string()),
        ("click", [link]) => Message::NavLinkClicked((*link).to_string()),
        ("scroll" | "frame" | "viewport" | "lang" | "click", _) => {
            bail!("wrong number of arguments for {cmd:?}: {line:?}")
        }
        _ => bail!("unknown event {cmd:?}"),
    };
    Ok(Some(message))
}

pub fn parse_script(text: &str) -> Result<Vec<Message>> {
    let mut messages = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(message) =
            parse_event_line(line).with_context(|| format!("event script line {}", idx + 1))?
        {
            messages.push(message);
        }
    }
    Ok(messages)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScriptSummary {
    pub applied: usize,
    pub rejected: usize,
}

/// Feed every message to `app`, then flush one last frame so a throttled
/// scroll at the end of the script is still reconciled. Rejected messages
/// are logged and skipped.
pub fn run_script(app: &mut App, host: &mut dyn PageHost, messages: Vec<Message>) -> ScriptSummary {
    let mut summary = ScriptSummary::default();
    for message in messages.into_iter().chain(std::iter::once(Message::AnimationFrame)) {
        debug!(?message, "Dispatching event");
        match app.update(message, host) {
            Ok(()) => summary.applied += 1,
            Err(err) => {
                warn!("Event rejected: {err}");
                summary.rejected += 1;
            }
        }
    }
    summary
}

fn strip_comment(line: &str) -> &str {
    let mut prev_is_space = true;
    for (idx, ch) in line.char_indices() {
        if ch == '#' && prev_is_space {
            return &line[..idx];
        }
        prev_is_space = ch.is_whitespace();
    }
    line
}

fn parse_px(raw: &str) -> Result<f32> {
    let value: f32 = raw
        .parse()
        .with_context(|| format!("expected a pixel value, got {raw:?}"))?;
    if !value.is_finite() {
        bail!("pixel value must be finite, got {raw:?}");
    }
    Ok(value)
}
