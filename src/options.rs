use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::{DateTime, Local};

use crate::cli::Cli;

pub const LOG_FILE_NAME: &str = "mp3list.log";

/// Fully resolved run paths. Constructed once at startup; every check in
/// `resolve` is fatal before any scanning or writing happens.
#[derive(Debug)]
pub struct Options {
    pub scan_dir: PathBuf,
    pub out_file: PathBuf,
    pub log_file: Option<PathBuf>,
}

/// Validate the CLI arguments and resolve the output and log paths.
///
/// Check order matters: scan root, then output folder, then output file
/// (existence and overwrite policy), then log location.
pub fn resolve(cli: &Cli, run_dt: DateTime<Local>) -> Result<Options> {
    if !cli.scan_dir.exists() {
        bail!("Cannot find '{}'", cli.scan_dir.display());
    }
    if !cli.scan_dir.is_dir() {
        bail!("'{}' is not a folder", cli.scan_dir.display());
    }

    if let Some(out_dir) = &cli.output_dir {
        if !out_dir.is_dir() {
            bail!("Output folder '{}' does not exist", out_dir.display());
        }
    }

    let stamp = run_dt.format("%Y%m%d_%H%M%S").to_string();

    let out_file = match &cli.output_file {
        Some(given) => {
            let name = match given.file_name() {
                Some(name) => PathBuf::from(name),
                None => bail!("Invalid output file '{}'", given.display()),
            };
            let name = if cli.timestamp {
                insert_timestamp(&name, &stamp)
            } else {
                name
            };

            match &cli.output_dir {
                // --output-dir overrides the folder part, keeping the base name.
                Some(out_dir) => out_dir.join(name),
                None => {
                    let parent = parent_dir(given);
                    if !parent.is_dir() {
                        bail!("Output folder '{}' does not exist", parent.display());
                    }
                    given.with_file_name(name)
                }
            }
        }
        None => {
            let name = format!("mp3-tags-{stamp}.csv");
            match &cli.output_dir {
                Some(out_dir) => out_dir.join(name),
                None => PathBuf::from(name),
            }
        }
    };

    if out_file.exists() && !cli.overwrite {
        bail!(
            "Output file '{}' exists, use -y to overwrite",
            out_file.display()
        );
    }

    let log_file = if cli.no_log {
        None
    } else {
        Some(match &cli.output_dir {
            Some(out_dir) => out_dir.join(LOG_FILE_NAME),
            None => PathBuf::from(LOG_FILE_NAME),
        })
    };

    Ok(Options {
        scan_dir: cli.scan_dir.clone(),
        out_file,
        log_file,
    })
}

/// Parent of `path`, with a bare file name resolving to the current folder.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Insert `-<stamp>` before the file extension: `tags.csv` becomes
/// `tags-20240123_045600.csv`.
fn insert_timestamp(name: &Path, stamp: &str) -> PathBuf {
    let stem = name
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => PathBuf::from(format!("{stem}-{stamp}.{ext}")),
        None => PathBuf::from(format!("{stem}-{stamp}")),
    }
}
