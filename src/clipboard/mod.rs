use std::io::Write;
use std::process::{Child, Command, ExitStatus, Stdio};
use thiserror::Error;

/// Errors reported by a clipboard backend.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard command available (install xclip, xsel or wl-clipboard)")]
    Unavailable,
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to send text to the clipboard: {0}")]
    Write(#[from] std::io::Error),
    #[error("clipboard command exited with {0}")]
    Failed(ExitStatus),
}

/// Something that can receive text for the platform clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by the platform's copy command.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    /// Pick the copy command for this platform.
    fn command() -> Result<(&'static str, &'static [&'static str]), ClipboardError> {
        if cfg!(target_os = "macos") {
            return Ok(("pbcopy", &[]));
        }
        if cfg!(target_os = "windows") {
            return Ok(("clip", &[]));
        }
        if std::env::var_os("WAYLAND_DISPLAY").is_some() && command_exists("wl-copy") {
            return Ok(("wl-copy", &[]));
        }
        if command_exists("xclip") {
            return Ok(("xclip", &["-selection", "clipboard"]));
        }
        if command_exists("xsel") {
            return Ok(("xsel", &["--clipboard", "--input"]));
        }
        Err(ClipboardError::Unavailable)
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let (command, args) = Self::command()?;
        tracing::debug!(command, bytes = text.len(), "writing to clipboard");

        let mut child = Command::new(command)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn { command, source })?;

        feed(&mut child, text)
    }
}

/// Write `text` to the child's stdin and wait for it to exit.
///
/// The child is always reaped, including when the write fails.
fn feed(child: &mut Child, text: &str) -> Result<(), ClipboardError> {
    if let Some(mut stdin) = child.stdin.take()
        && let Err(e) = stdin.write_all(text.as_bytes())
    {
        drop(stdin);
        let _ = child.kill();
        let _ = child.wait();
        return Err(ClipboardError::Write(e));
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(ClipboardError::Failed(status));
    }
    Ok(())
}

fn command_exists(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
