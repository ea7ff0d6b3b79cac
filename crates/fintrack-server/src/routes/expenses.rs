use axum::Extension;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use fintrack_core::keys;
use fintrack_core::models::expense::Expense;
use fintrack_storage::error::StorageError;
use fintrack_storage::{objects, state};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateExpense {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: jiff::civil::Date,
    #[serde(default)]
    pub notes: Option<String>,
}

pub async fn create_expense(
    State(app): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<CreateExpense>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let expense = Expense {
        id: Uuid::new_v4(),
        user_id: user.user_id,
        description: req.description,
        amount: req.amount,
        category: req.category,
        date: req.date,
        notes: req.notes,
        created_at: jiff::Timestamp::now(),
    };
    state::save_json(
        &app.store,
        &keys::expense(user.user_id, expense.id),
        &expense,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(expense)))
}

pub async fn list_expenses(
    State(app): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let doc_keys =
        objects::list_documents(&app.store, &keys::expenses_prefix(user.user_id)).await?;

    let mut expenses = Vec::with_capacity(doc_keys.len());
    for key in &doc_keys {
        let expense: Expense = state::load_json(&app.store, key).await?;
        expenses.push(expense);
    }
    Ok(Json(expenses))
}

pub async fn delete_expense(
    State(app): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, ApiError> {
    let key = keys::expense(user.user_id, id);

    match state::load_json::<Expense>(&app.store, &key).await {
        Ok(_) => {}
        Err(StorageError::NotFound { .. }) => {
            return Err(ApiError::NotFound("Expense not found".to_string()));
        }
        Err(e) => return Err(e.into()),
    }
    objects::delete_document(&app.store, &key).await?;

    Ok(Json(json!({ "message": "Expense deleted successfully" })))
}
