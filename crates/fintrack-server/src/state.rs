use fintrack_reports::service::ReportService;
use fintrack_storage::store::Store;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub reports: ReportService,
    pub jwt_secret: String,
}
