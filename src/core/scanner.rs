use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::core::extractor;
use crate::models::{FileRecord, TagRead};
use crate::progress::ScanObserver;
use crate::runlog::RunLog;

/// Walk `root` recursively and build one record per MP3 file, in
/// lexicographic full-path order. Per-file failures land in the record's
/// error field and never abort the scan.
pub fn scan_directory(
    root: &Path,
    log: &mut RunLog,
    observer: &dyn ScanObserver,
) -> Result<Vec<FileRecord>> {
    let mut paths = Vec::new();
    collect_mp3_paths(root, &mut paths)?;
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    let mut records = Vec::with_capacity(paths.len());
    for path in &paths {
        observer.on_file(path);
        log.line(&format!("FILE: {}", path.display()))?;
        records.push(build_record(path));
    }

    Ok(records)
}

/// Recursively collect files with an `.mp3` extension (any case).
fn collect_mp3_paths(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("'{}' is not a directory", dir.display());
    }

    let entries =
        fs::read_dir(dir).with_context(|| format!("cannot read folder '{}'", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            collect_mp3_paths(&path, paths)?;
        } else if is_mp3(&path) {
            paths.push(path);
        }
    }

    Ok(())
}

fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}

/// Assemble the report row for one file. File identity and mtime are always
/// captured; tag fields are filled only when extraction fully succeeds.
fn build_record(path: &Path) -> FileRecord {
    let mut record = FileRecord {
        full_name: path.display().to_string(),
        file_name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        ..FileRecord::default()
    };

    match modified_timestamp(path) {
        Ok(stamp) => record.file_modified = stamp,
        Err(e) => record.error = e.to_string(),
    }

    if record.error.is_empty() {
        match extractor::read_tag(path) {
            TagRead::Unreadable => record.error = "Failed to read file".to_string(),
            TagRead::NoTag => record.error = "No tag info".to_string(),
            TagRead::Tag(summary) => {
                record.album = summary.album.unwrap_or_default();
                record.artist = summary.artist.unwrap_or_default();
                record.title = summary.title.unwrap_or_default();
                record.track = summary.track.map(|n| n.to_string()).unwrap_or_default();
                record.year = summary.year.map(|y| y.to_string()).unwrap_or_default();
                record.tdat = summary.tdat.unwrap_or_default();
                record.tit3 = summary.tit3.unwrap_or_default();
            }
        }
    }

    record.sanitize();
    record
}

/// Last-modified time as a local `YYYY-MM-DD HH:MM:SS` string.
fn modified_timestamp(path: &Path) -> io::Result<String> {
    let modified = path.metadata()?.modified()?;
    Ok(DateTime::<Local>::from(modified)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string())
}
