//! Artifact naming and on-disk placement for rendered documents.

use std::path::{Path, PathBuf};

use fintrack_core::models::report::ReportType;

use crate::error::ExportError;

/// `Income_Statement_1733240000000.pdf` — the report title with spaces
/// collapsed to underscores, stamped with epoch milliseconds.
pub fn artifact_file_name(report_type: ReportType, now: jiff::Timestamp) -> String {
    format!(
        "{}_{}.pdf",
        report_type.title().replace(' ', "_"),
        now.as_millisecond()
    )
}

/// URL path a stored artifact is served under.
pub fn artifact_url(file_name: &str) -> String {
    format!("/reports/{file_name}")
}

/// Write artifact bytes under the reports directory, atomically (temp file +
/// rename). The write completes before the caller marks its job completed.
pub fn write_artifact(
    reports_dir: &Path,
    file_name: &str,
    bytes: &[u8],
) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(reports_dir)?;

    let path = reports_dir.join(file_name);
    let tmp = path.with_extension("pdf.tmp");
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, &path)?;

    tracing::info!(file = %path.display(), "artifact written");
    Ok(path)
}
