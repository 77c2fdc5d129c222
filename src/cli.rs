use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use chrono::Local;
use clap::Parser;

use crate::core::{report, scanner};
use crate::options;
use crate::progress::{ConsoleProgress, NoProgress, ScanObserver};
use crate::runlog::RunLog;

#[derive(Parser)]
#[command(
    name = "mp3list",
    version,
    about = "Scan a folder for MP3 files and write their ID3 tags to a CSV report"
)]
pub struct Cli {
    /// Folder to scan for mp3 file(s), recursively
    pub scan_dir: PathBuf,

    /// Name of the output file. Default is mp3-tags-<date>_<time>.csv
    #[arg(short = 'o', long)]
    pub output_file: Option<PathBuf>,

    /// Folder for the output file. Must already exist
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(short = 'y', long)]
    pub overwrite: bool,

    /// Insert a -<date>_<time> suffix before the output file extension
    #[arg(short = 't', long)]
    pub timestamp: bool,

    /// Do not write a log file
    #[arg(long)]
    pub no_log: bool,
}

pub fn run(cli: Cli) -> Result<()> {
    let started = Instant::now();
    let opts = options::resolve(&cli, Local::now())?;

    let mut log = RunLog::open(opts.log_file.as_deref())?;
    log.line("BEGIN")?;

    println!("\n{} (v{})\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!("Scanning '{}' for mp3 file(s).\n", opts.scan_dir.display());

    let progress: Box<dyn ScanObserver> = if std::io::stderr().is_terminal() {
        Box::new(ConsoleProgress::new())
    } else {
        Box::new(NoProgress)
    };
    let records = scanner::scan_directory(&opts.scan_dir, &mut log, progress.as_ref())?;
    progress.finish();

    println!("Writing to '{}'\n", opts.out_file.display());
    report::write_report(&opts.out_file, &records)?;

    let failed = records.iter().filter(|r| !r.error.is_empty()).count();
    println!("Listed {} file(s), {} with errors.", records.len(), failed);

    log.line(&format!(
        "END: Run time = {:.3}s",
        started.elapsed().as_secs_f64()
    ))?;

    Ok(())
}
