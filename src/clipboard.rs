//! System clipboard bridge through the platform's clipboard tools.

use crate::models::{PaletteError, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Clipboard programs tried in order, with their arguments.
#[cfg(target_os = "linux")]
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "macos")]
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[];

/// Copies `text` using the first clipboard tool that accepts it.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    for (program, args) in CLIPBOARD_TOOLS {
        match pipe_into(program, args, text) {
            Ok(()) => {
                debug!(program, "Copied to clipboard");
                return Ok(());
            }
            Err(e) => debug!(program, error = %e, "Clipboard tool failed"),
        }
    }

    Err(PaletteError::Clipboard(format!(
        "no working clipboard tool (tried {})",
        CLIPBOARD_TOOLS
            .iter()
            .map(|(program, _)| *program)
            .collect::<Vec<_>>()
            .join(", ")
    )))
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("{} exited with {}", program, status)))
    }
}
