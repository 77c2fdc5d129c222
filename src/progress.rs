use std::path::Path;

use indicatif::ProgressBar;

/// Callback the scanner invokes before it touches each file, so a long scan
/// shows where it currently is. Implementations must not affect the scan.
pub trait ScanObserver {
    fn on_file(&self, path: &Path);

    /// Called once after the last file; clears any transient display.
    fn finish(&self) {}
}

/// Redraws the current file name in place on an interactive terminal.
pub struct ConsoleProgress {
    spinner: ProgressBar,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self {
            spinner: ProgressBar::new_spinner(),
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanObserver for ConsoleProgress {
    fn on_file(&self, path: &Path) {
        self.spinner.set_message(path.display().to_string());
        self.spinner.tick();
    }

    fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

/// Observer for non-interactive runs and tests.
pub struct NoProgress;

impl ScanObserver for NoProgress {
    fn on_file(&self, _path: &Path) {}
}
