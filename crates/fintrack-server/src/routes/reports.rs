use std::collections::BTreeMap;

use axum::Extension;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use fintrack_core::models::report::Report;
use fintrack_reports::service::{CreateReport, ReportPage};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

/// Start a report generation job.
///
/// The job is returned immediately at `pending`; generation runs on a
/// detached task and is observed by polling. An unknown report_type or
/// period never deserializes, so it is rejected here before any row exists.
pub async fn generate_report(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<CreateReport>, JsonRejection>,
) -> Result<(StatusCode, Json<Report>), ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let report = state.reports.create(user.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

pub async fn list_reports(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ReportPage>, ApiError> {
    let page = state
        .reports
        .list(
            user.user_id,
            query.page.unwrap_or(1),
            query.limit.unwrap_or(10),
        )
        .await?;
    Ok(Json(page))
}

pub async fn get_report(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Report>, ApiError> {
    let report = state.reports.get(user.user_id, id).await?;
    Ok(Json(report))
}

pub async fn delete_report(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    state.reports.delete(user.user_id, id).await?;
    Ok(Json(json!({ "message": "Report deleted successfully" })))
}

pub async fn get_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<BTreeMap<String, u64>>, ApiError> {
    let stats = state.reports.stats(user.user_id).await?;
    Ok(Json(stats))
}

/// Serve a completed report's PDF as an attachment under its stored name.
pub async fn download_report(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let (report, bytes) = state.reports.download(user.user_id, id).await?;
    let file_name = report.file_name.unwrap_or_default();

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        ),
    ];
    Ok((headers, bytes).into_response())
}
