//! Report job lifecycle and repository operations.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fintrack_core::keys;
use fintrack_core::models::report::{
    CustomPeriod, PeriodRange, Report, ReportFormat, ReportPeriod, ReportStatus, ReportType,
};
use fintrack_core::period::resolve_period;
use fintrack_export::{artifact, pdf, render};
use fintrack_storage::error::StorageError;
use fintrack_storage::store::Store;
use fintrack_storage::{objects, state};

use crate::aggregate::build_report_data;
use crate::error::ReportError;

/// Parameters of a report creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReport {
    pub report_type: ReportType,
    pub period: ReportPeriod,
    #[serde(default)]
    pub format: Option<ReportFormat>,
    #[serde(default)]
    pub custom_period: Option<CustomPeriod>,
}

/// One page of a user's jobs, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct ReportPage {
    pub data: Vec<Report>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pagination {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

/// Runs the report pipeline: validates and persists new jobs, drives the
/// detached generation task, and serves the repository reads.
///
/// Each job's document is its sole progress record; jobs never share
/// mutable state, so concurrent generations need no coordination.
#[derive(Clone)]
pub struct ReportService {
    store: Store,
    reports_dir: PathBuf,
}

impl ReportService {
    pub fn new(store: Store, reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            reports_dir: reports_dir.into(),
        }
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    /// Validate the request, persist the job at `pending`, and schedule the
    /// generation task without awaiting it. The caller gets the pending row
    /// back immediately and polls for progress.
    pub async fn create(&self, user_id: Uuid, req: CreateReport) -> Result<Report, ReportError> {
        let today = jiff::Zoned::now().date();
        let range = resolve_period(req.period, req.custom_period.as_ref(), today)?;

        let now = jiff::Timestamp::now();
        let report = Report {
            id: Uuid::new_v4(),
            user_id,
            report_type: req.report_type,
            period: req.period,
            format: req.format.unwrap_or(ReportFormat::Pdf),
            status: ReportStatus::Pending,
            // Stored only for custom periods; a stray range on a named
            // period is dropped rather than persisted.
            custom_period: if req.period == ReportPeriod::Custom {
                req.custom_period
            } else {
                None
            },
            report_data: None,
            generated_at: None,
            file_name: None,
            file_url: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        };

        state::save_json(&self.store, &keys::report(user_id, report.id), &report).await?;
        tracing::info!(report_id = %report.id, report_type = %report.report_type, "report job created");

        let service = self.clone();
        let job = report.clone();
        tokio::spawn(async move {
            service.process_generation(job, range).await;
        });

        Ok(report)
    }

    /// The detached generation task. Every failure path ends in a persisted
    /// terminal state; only process death can leave a job in `generating`.
    pub async fn process_generation(&self, report: Report, range: PeriodRange) {
        if let Err(e) = self.run_generation(&report, range).await {
            tracing::error!(report_id = %report.id, error = %e, "report generation failed");
            if let Err(persist) = self.mark_failed(&report, e.to_string()).await {
                tracing::error!(
                    report_id = %report.id,
                    error = %persist,
                    "failed to persist failure state"
                );
            }
        }
    }

    async fn run_generation(&self, report: &Report, range: PeriodRange) -> Result<(), ReportError> {
        let key = keys::report(report.user_id, report.id);

        let mut job = report.clone();
        job.status = ReportStatus::Generating;
        job.updated_at = jiff::Timestamp::now();
        state::save_json(&self.store, &key, &job).await?;

        let data =
            build_report_data(&self.store, report.user_id, report.report_type, range).await?;

        let rendered = render::render_report(report.report_type, range, &data.summary)?;
        let bytes = pdf::generate_pdf(&rendered)?;

        // The artifact is fully on disk before the row says `completed`.
        let now = jiff::Timestamp::now();
        let file_name = artifact::artifact_file_name(report.report_type, now);
        artifact::write_artifact(&self.reports_dir, &file_name, &bytes)?;

        job.status = ReportStatus::Completed;
        job.report_data = Some(data);
        job.generated_at = Some(now);
        job.file_url = Some(artifact::artifact_url(&file_name));
        job.file_name = Some(file_name);
        job.updated_at = now;
        state::save_json(&self.store, &key, &job).await?;

        tracing::info!(report_id = %report.id, "report generation completed");
        Ok(())
    }

    async fn mark_failed(&self, report: &Report, message: String) -> Result<(), ReportError> {
        let key = keys::report(report.user_id, report.id);

        let mut job = report.clone();
        job.status = ReportStatus::Failed;
        job.error_message = Some(message);
        job.updated_at = jiff::Timestamp::now();
        state::save_json(&self.store, &key, &job).await?;
        Ok(())
    }

    /// One page of the owner's jobs, sorted by creation time descending.
    pub async fn list(
        &self,
        user_id: Uuid,
        page: usize,
        limit: usize,
    ) -> Result<ReportPage, ReportError> {
        let page = page.max(1);
        let limit = limit.clamp(1, 100);

        let doc_keys =
            objects::list_documents(&self.store, &keys::reports_prefix(user_id)).await?;
        let mut reports = Vec::with_capacity(doc_keys.len());
        for key in &doc_keys {
            let report: Report = state::load_json(&self.store, key).await?;
            reports.push(report);
        }
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = reports.len();
        let total_pages = total.div_ceil(limit);
        let data = reports
            .into_iter()
            .skip((page - 1) * limit)
            .take(limit)
            .collect();

        Ok(ReportPage {
            data,
            pagination: Pagination {
                total,
                page,
                limit,
                total_pages,
            },
        })
    }

    /// Fetch scoped by owner. A job owned by someone else is
    /// indistinguishable from a missing one.
    pub async fn get(&self, user_id: Uuid, id: Uuid) -> Result<Report, ReportError> {
        match state::load_json(&self.store, &keys::report(user_id, id)).await {
            Ok(report) => Ok(report),
            Err(StorageError::NotFound { .. }) => Err(ReportError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// Ownership-scoped removal of the job row. The on-disk artifact is left
    /// in place; see DESIGN.md.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<(), ReportError> {
        // Existence check first, so deleting a missing or foreign-owned job
        // reports NotFound instead of silently succeeding.
        self.get(user_id, id).await?;
        objects::delete_document(&self.store, &keys::report(user_id, id)).await?;

        tracing::info!(report_id = %id, "report deleted");
        Ok(())
    }

    /// Job counts per status over the caller's own jobs. Statuses with no
    /// jobs are omitted.
    pub async fn stats(&self, user_id: Uuid) -> Result<BTreeMap<String, u64>, ReportError> {
        let doc_keys =
            objects::list_documents(&self.store, &keys::reports_prefix(user_id)).await?;

        let mut counts = BTreeMap::new();
        for key in &doc_keys {
            let report: Report = state::load_json(&self.store, key).await?;
            *counts.entry(report.status.to_string()).or_insert(0u64) += 1;
        }
        Ok(counts)
    }

    /// Artifact bytes for a completed job, plus the job row carrying the
    /// stored file name.
    pub async fn download(&self, user_id: Uuid, id: Uuid) -> Result<(Report, Vec<u8>), ReportError> {
        let report = self.get(user_id, id).await?;

        if report.status != ReportStatus::Completed {
            return Err(ReportError::NotReady {
                status: report.status,
            });
        }
        let file_name = report
            .file_name
            .clone()
            .ok_or(ReportError::ArtifactMissing)?;

        let path = self.reports_dir.join(&file_name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok((report, bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ReportError::ArtifactMissing),
            Err(e) => Err(ReportError::Storage(StorageError::Read {
                key: file_name,
                source: e,
            })),
        }
    }
}
