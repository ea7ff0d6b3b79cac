use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An income entry. Owned by the ledger side of the application; the report
/// pipeline only ever reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: jiff::civil::Date,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
}
