//! Document key conventions.
//!
//! Pure string functions — no storage dependency. These define the canonical
//! layout of JSON documents under the fintrack data directory. Every key is
//! namespaced by the owning user, so ownership scoping falls out of the
//! layout itself.

use uuid::Uuid;

pub fn report(user_id: Uuid, id: Uuid) -> String {
    format!("reports/{user_id}/{id}.json")
}

pub fn reports_prefix(user_id: Uuid) -> String {
    format!("reports/{user_id}/")
}

pub fn income(user_id: Uuid, id: Uuid) -> String {
    format!("incomes/{user_id}/{id}.json")
}

pub fn incomes_prefix(user_id: Uuid) -> String {
    format!("incomes/{user_id}/")
}

pub fn expense(user_id: Uuid, id: Uuid) -> String {
    format!("expenses/{user_id}/{id}.json")
}

pub fn expenses_prefix(user_id: Uuid) -> String {
    format!("expenses/{user_id}/")
}

pub fn budget(user_id: Uuid, id: Uuid) -> String {
    format!("budgets/{user_id}/{id}.json")
}

pub fn budgets_prefix(user_id: Uuid) -> String {
    format!("budgets/{user_id}/")
}
