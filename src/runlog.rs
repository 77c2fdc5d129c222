use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

/// Append-mode run log with one timestamped line per event.
///
/// Opened once after option validation and passed down explicitly; an
/// instance opened with `None` (the `--no-log` case) swallows every line.
pub struct RunLog {
    file: Option<File>,
}

impl RunLog {
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("cannot open log file '{}'", path.display()))?,
            ),
            None => None,
        };
        Ok(Self { file })
    }

    /// Append `<timestamp> <message>` to the log. No-op when logging is off.
    pub fn line(&mut self, message: &str) -> Result<()> {
        if let Some(file) = self.file.as_mut() {
            writeln!(
                file,
                "{} {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                message
            )
            .context("cannot write to log file")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_timestamped_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");

        let mut log = RunLog::open(Some(&path)).unwrap();
        log.line("BEGIN").unwrap();
        log.line("FILE: /music/a.mp3").unwrap();
        drop(log);

        let mut log = RunLog::open(Some(&path)).unwrap();
        log.line("END: Run time = 0.001s").unwrap();
        drop(log);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with(" BEGIN"));
        assert!(lines[1].ends_with(" FILE: /music/a.mp3"));
        assert!(lines[2].ends_with(" END: Run time = 0.001s"));
        // 19-char timestamp prefix on every line.
        assert!(lines.iter().all(|l| l.as_bytes()[4] == b'-' && l.as_bytes()[19] == b' '));
    }

    #[test]
    fn test_suppressed_log_writes_nothing() {
        let mut log = RunLog::open(None).unwrap();
        log.line("BEGIN").unwrap();
        log.line("END").unwrap();
    }
}
