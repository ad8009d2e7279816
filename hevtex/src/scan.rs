//! Batch job discovery.

use crate::pipeline::ConversionJob;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Recursively enumerate DDS files under `root` that still need a PNG.
///
/// A file qualifies when it is a regular file, its extension is
/// exactly `dds` or `DDS`, and the sibling output path (same stem,
/// `.png`) does not exist yet. Unreadable entries are logged and
/// skipped, never fatal to the scan.
///
/// The existence check runs once here and is not repeated at write
/// time; a destination created while the batch runs gets overwritten.
pub fn discover_jobs(root: &Path) -> Vec<ConversionJob> {
    let mut jobs = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                warn!(error = %error, "Skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if !has_dds_extension(entry.path()) {
            continue;
        }

        let job = ConversionJob::for_source(entry.path());
        if job.dest.exists() {
            debug!(source = %job.source.display(), "Skipping, output already exists");
            continue;
        }
        jobs.push(job);
    }
    jobs
}

fn has_dds_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("dds") | Some("DDS")
    )
}
