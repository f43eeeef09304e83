// Line scanner shared by every account store.
// Each call opens the file read-only, walks it once and drops the handle before returning.

use crate::core_records::error::StoreError;
use log::{debug, error};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::ControlFlow;
use std::path::Path;

/// Feeds every line of `path` to `visit` until it breaks or the file ends.
///
/// Lines are split on `\n`, a trailing `\r` is dropped and the bytes are
/// decoded lossily so one odd byte cannot abort a scan.
fn for_each_line<F>(path: &Path, mut visit: F) -> Result<(), StoreError>
where
    F: FnMut(&str) -> ControlFlow<()>,
{
    debug!("Opening account file {}", path.display());
    let file = File::open(path).map_err(|e| {
        error!("Failed to open account file {}: {}", path.display(), e);
        StoreError::read(path, e)
    })?;
    let reader = BufReader::new(file);

    for chunk in reader.split(b'\n') {
        let mut bytes = chunk.map_err(|e| {
            error!("Failed to read account file {}: {}", path.display(), e);
            StoreError::read(path, e)
        })?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        let line = String::from_utf8_lossy(&bytes);
        if visit(&*line).is_break() {
            break;
        }
    }
    Ok(())
}

/// Parses every line of `path`, silently skipping the ones `parse` rejects.
///
/// # Returns
///
/// The parsed records in file order.
pub fn collect_all<R, P>(path: &Path, parse: P) -> Result<Vec<R>, StoreError>
where
    P: Fn(&str) -> Option<R>,
{
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for_each_line(path, |line| {
        match parse(line) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
        ControlFlow::Continue(())
    })?;
    debug!(
        "Read {} records from {} ({} lines skipped)",
        records.len(),
        path.display(),
        skipped
    );
    Ok(records)
}

/// Returns the first record of `path` that parses and satisfies `matches`.
///
/// Reading stops at the first hit, so later duplicates are never seen.
pub fn scan_first<R, P, M>(path: &Path, parse: P, matches: M) -> Result<Option<R>, StoreError>
where
    P: Fn(&str) -> Option<R>,
    M: Fn(&R) -> bool,
{
    let mut found = None;
    for_each_line(path, |line| match parse(line) {
        Some(record) if matches(&record) => {
            found = Some(record);
            ControlFlow::Break(())
        }
        _ => ControlFlow::Continue(()),
    })?;
    Ok(found)
}
