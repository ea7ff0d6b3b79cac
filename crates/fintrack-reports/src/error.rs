use thiserror::Error;

use fintrack_core::error::CoreError;
use fintrack_core::models::report::ReportStatus;
use fintrack_export::error::ExportError;
use fintrack_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report not found")]
    NotFound,

    #[error("Report is {status}. Cannot download yet.")]
    NotReady { status: ReportStatus },

    #[error("File not found on server")]
    ArtifactMissing,

    #[error(transparent)]
    Period(#[from] CoreError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
