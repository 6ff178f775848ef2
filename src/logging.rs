// Transfer Logging
// One formatted line per message transfer, to stdout or appended to a file

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Default transfer log file, one message per line.
pub const DEFAULT_LOG_FILE: &str = "message_log.txt";

/// Sink for transfer events. Called once per transferred message with a
/// pre-formatted line.
pub trait TransferLog {
    fn record(&mut self, line: &str) -> io::Result<()>;
}

/// Writes each transfer line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleLog;

impl TransferLog for ConsoleLog {
    fn record(&mut self, line: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)
    }
}

/// Appends each transfer line, newline-terminated, to a text file.
/// Append-only: no rotation, no locking. Concurrent writers are out of
/// scope for this demo.
#[derive(Debug, Clone)]
pub struct FileLog {
    path: PathBuf,
}

impl FileLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl TransferLog for FileLog {
    fn record(&mut self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }
}
