use std::env;
use std::path::PathBuf;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use fintrack_reports::service::ReportService;
use fintrack_storage::store::Store;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data_dir = PathBuf::from(
        env::var("FINTRACK_DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
    );
    let addr = env::var("FINTRACK_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let jwt_secret = env::var("FINTRACK_JWT_SECRET")
        .map_err(|_| eyre::eyre!("FINTRACK_JWT_SECRET must be set"))?;

    let store = Store::new(data_dir.join("store"));
    let reports = ReportService::new(store.clone(), data_dir.join("reports"));

    let state = AppState {
        store,
        reports,
        jwt_secret,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let protected = Router::new()
        .route("/reports/generate", post(routes::reports::generate_report))
        .route("/reports", get(routes::reports::list_reports))
        .route("/reports/stats", get(routes::reports::get_stats))
        .route(
            "/reports/download/{id}",
            get(routes::reports::download_report),
        )
        .route("/reports/{id}", get(routes::reports::get_report))
        .route("/reports/{id}", delete(routes::reports::delete_report))
        .route("/incomes", get(routes::incomes::list_incomes))
        .route("/incomes", post(routes::incomes::create_income))
        .route("/incomes/{id}", delete(routes::incomes::delete_income))
        .route("/expenses", get(routes::expenses::list_expenses))
        .route("/expenses", post(routes::expenses::create_expense))
        .route("/expenses/{id}", delete(routes::expenses::delete_expense))
        .route("/budgets", get(routes::budgets::list_budgets))
        .route("/budgets", post(routes::budgets::create_budget))
        .route("/budgets/{id}", delete(routes::budgets::delete_budget))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "fintrack server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
