use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use fintrack_core::keys;
use fintrack_core::models::budget::Budget;
use fintrack_storage::error::StorageError;
use fintrack_storage::{objects, state};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBudget {
    pub category: String,
    pub amount: Decimal,
    /// Calendar month the budget covers, as "YYYY-MM".
    pub month: String,
    #[serde(default)]
    pub spent: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
}

pub async fn create_budget(
    State(app): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateBudget>,
) -> Result<(StatusCode, Json<Budget>), ApiError> {
    let budget = Budget {
        id: Uuid::new_v4(),
        user_id: user.user_id,
        category: req.category,
        amount: req.amount,
        spent: req.spent.unwrap_or(Decimal::ZERO),
        month: req.month,
        description: req.description,
        created_at: jiff::Timestamp::now(),
    };
    state::save_json(&app.store, &keys::budget(user.user_id, budget.id), &budget).await?;

    Ok((StatusCode::CREATED, Json(budget)))
}

pub async fn list_budgets(
    State(app): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Budget>>, ApiError> {
    let doc_keys =
        objects::list_documents(&app.store, &keys::budgets_prefix(user.user_id)).await?;

    let mut budgets = Vec::with_capacity(doc_keys.len());
    for key in &doc_keys {
        let budget: Budget = state::load_json(&app.store, key).await?;
        budgets.push(budget);
    }
    Ok(Json(budgets))
}

pub async fn delete_budget(
    State(app): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let key = keys::budget(user.user_id, id);

    match state::load_json::<Budget>(&app.store, &key).await {
        Ok(_) => {}
        Err(StorageError::NotFound { .. }) => {
            return Err(ApiError::NotFound("Budget not found".to_string()));
        }
        Err(e) => return Err(e.into()),
    }
    objects::delete_document(&app.store, &key).await?;

    Ok(Json(json!({ "message": "Budget deleted successfully" })))
}
