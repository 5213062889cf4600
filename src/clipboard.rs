use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};

/// Somewhere to put the finished note.
pub trait ClipboardWriter {
    fn write(&self, text: &str) -> Result<()>;
}

/// Pipes the text into an external command such as `pbcopy`.
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Split a command line on whitespace; `None` if it is blank.
    pub fn parse(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl ClipboardWriter for CommandClipboard {
    fn write(&self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to start clipboard command `{}`", self.program))?;

        child
            .stdin
            .take()
            .context("Clipboard command has no stdin")?
            .write_all(text.as_bytes())
            .context("Failed to write to clipboard command")?;

        let status = child.wait()?;
        if !status.success() {
            bail!("`{}` exited with {}", self.program, status);
        }
        Ok(())
    }
}

/// Discards everything.
pub struct NoopClipboard;

impl ClipboardWriter for NoopClipboard {
    fn write(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// Build the writer for the `clipboard` setting; `none` or blank turns copying off.
pub fn from_setting(command: &str) -> Box<dyn ClipboardWriter> {
    if command.trim().eq_ignore_ascii_case("none") {
        return Box::new(NoopClipboard);
    }
    match CommandClipboard::parse(command) {
        Some(cmd) => Box::new(cmd),
        None => Box::new(NoopClipboard),
    }
}

/// Copy if possible. A failed copy is logged and otherwise ignored.
pub fn copy_best_effort(writer: &dyn ClipboardWriter, text: &str) {
    match writer.write(text) {
        Ok(()) => debug!("Copied {} bytes to clipboard", text.len()),
        Err(e) => info!("Clipboard copy failed: {:#}", e),
    }
}
