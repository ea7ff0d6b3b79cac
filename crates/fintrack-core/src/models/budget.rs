use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A monthly budget envelope. Budgets are keyed by calendar month rather
/// than by date, so the aggregator matches them on month membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: String,
    pub amount: Decimal,
    pub spent: Decimal,
    /// The calendar month this budget covers, as "YYYY-MM".
    pub month: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    pub created_at: jiff::Timestamp,
}
