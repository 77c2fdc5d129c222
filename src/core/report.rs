use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};

use crate::models::FileRecord;

/// Column names, in record order. The header row is emitted unquoted.
pub const REPORT_HEADER: &str =
    "FullName,FileName,FileModified,Album,Artist,Title,Track,Year,TDAT,TIT3,error";

/// Write the report: the fixed header line, then one row per record with
/// every field double-quoted. The overwrite policy is resolved by the
/// caller; an existing file at `path` is replaced.
pub fn write_report(path: &Path, records: &[FileRecord]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("cannot create output file '{}'", path.display()))?;
    writeln!(file, "{}", REPORT_HEADER)
        .with_context(|| format!("cannot write to '{}'", path.display()))?;

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(file);
    for record in records {
        writer
            .write_record(&record.as_row())
            .with_context(|| format!("cannot write to '{}'", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("cannot write to '{}'", path.display()))?;

    Ok(())
}
