use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use fintrack_core::keys;
use fintrack_core::models::income::Income;
use fintrack_storage::error::StorageError;
use fintrack_storage::{objects, state};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateIncome {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: jiff::civil::Date,
    #[serde(default)]
    pub notes: Option<String>,
}

pub async fn create_income(
    State(app): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateIncome>,
) -> Result<(StatusCode, Json<Income>), ApiError> {
    let income = Income {
        id: Uuid::new_v4(),
        user_id: user.user_id,
        description: req.description,
        amount: req.amount,
        category: req.category,
        date: req.date,
        notes: req.notes,
        created_at: jiff::Timestamp::now(),
    };
    state::save_json(&app.store, &keys::income(user.user_id, income.id), &income).await?;

    Ok((StatusCode::CREATED, Json(income)))
}

pub async fn list_incomes(
    State(app): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Income>>, ApiError> {
    let doc_keys =
        objects::list_documents(&app.store, &keys::incomes_prefix(user.user_id)).await?;

    let mut incomes = Vec::with_capacity(doc_keys.len());
    for key in &doc_keys {
        let income: Income = state::load_json(&app.store, key).await?;
        incomes.push(income);
    }
    Ok(Json(incomes))
}

pub async fn delete_income(
    State(app): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let key = keys::income(user.user_id, id);

    // Load first so a missing record is a 404, not a silent no-op.
    match state::load_json::<Income>(&app.store, &key).await {
        Ok(_) => {}
        Err(StorageError::NotFound { .. }) => {
            return Err(ApiError::NotFound("Income not found".to_string()));
        }
        Err(e) => return Err(e.into()),
    }
    objects::delete_document(&app.store, &key).await?;

    Ok(Json(json!({ "message": "Income deleted successfully" })))
}
