use crate::core::{Console, Result, Transcript};
use std::io::{self, Write};

/// Writes each line to stdout, flushing so the order is preserved even when
/// stderr diagnostics are interleaved.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdoutConsole {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        stdout.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct BufferConsole {
    lines: Vec<String>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Console for BufferConsole {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Pretty-printed JSON followed by a newline. Write failures surface as
/// `ScriptError::IoError`, same as `StdoutConsole`.
pub fn write_transcript_json<W: Write>(mut writer: W, transcript: &Transcript) -> Result<()> {
    let json = serde_json::to_string_pretty(transcript)?;
    writeln!(writer, "{}", json)?;
    writer.flush()?;
    Ok(())
}
