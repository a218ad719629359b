//! CSV loader: walks a directory tree and turns every `.csv` file into job records.
//!
//! Files are visited depth-first in file-name order, rows in file order.
//! A single unreadable or malformed file aborts the whole load.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::errors::{AppError, Result};
use crate::ingest::columns::job_from_record;
use crate::ingest::quoting::check_quoting;
use crate::models::job::Job;

const CSV_EXTENSION: &str = "csv";

/// Loads every job record found under `root`.
///
/// Errors:
/// - `PathNotFound` when `root` cannot be stat'ed
/// - `InvalidInput` when `root` is not a directory
/// - `Io` when the walk or a file open fails
/// - `Parse` when a CSV file is badly quoted or cannot be decoded
pub fn load_jobs(root: impl AsRef<Path>) -> Result<Vec<Job>> {
    let root = root.as_ref();

    let metadata = fs::metadata(root).map_err(|_| AppError::PathNotFound(root.to_path_buf()))?;
    if !metadata.is_dir() {
        return Err(AppError::InvalidInput(format!(
            "expected directory, got file: {}",
            root.display()
        )));
    }

    let mut jobs = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            AppError::io(path, e.into())
        })?;

        if entry.file_type().is_dir() || !is_csv(entry.path()) {
            continue;
        }

        read_csv_file(entry.path(), &mut jobs)?;
    }

    info!(root = %root.display(), count = jobs.len(), "Loaded job records");
    Ok(jobs)
}

fn is_csv(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(CSV_EXTENSION))
}

/// Appends the records of one file to `jobs`. The header row is skipped and
/// rows too short to map are dropped. The file's quoting is checked before any
/// row is mapped, so a broken file contributes nothing.
fn read_csv_file(path: &Path, jobs: &mut Vec<Job>) -> Result<()> {
    info!(file = %path.display(), "Reading CSV file");

    let data = fs::read(path).map_err(|e| AppError::io(path, e))?;
    check_quoting(&data).map_err(|e| AppError::parse(path, e))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_slice());

    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| AppError::parse(path, e))?;

        match job_from_record(&record) {
            Some(job) => jobs.push(job),
            None => debug!(
                file = %path.display(),
                row = index + 2,
                columns = record.len(),
                "Skipping short row"
            ),
        }
    }

    Ok(())
}
