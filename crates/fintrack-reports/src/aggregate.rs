//! Per-report-type aggregation over ledger records.

use rust_decimal::Decimal;
use uuid::Uuid;

use fintrack_core::keys;
use fintrack_core::models::budget::Budget;
use fintrack_core::models::expense::Expense;
use fintrack_core::models::income::Income;
use fintrack_core::models::report::{
    PeriodRange, ReportData, ReportDetails, ReportSummary, ReportType,
};
use fintrack_core::period::months_in_range;
use fintrack_storage::error::StorageError;
use fintrack_storage::store::Store;
use fintrack_storage::{objects, state};

/// Compute the summary and matched records for one report.
///
/// Income and expense records match when their date falls inside the range,
/// bounds inclusive. Budgets are matched by calendar-month membership
/// instead. Sums are plain totals of each record's amount; an empty match
/// yields an all-zero summary.
pub async fn build_report_data(
    store: &Store,
    user_id: Uuid,
    report_type: ReportType,
    range: PeriodRange,
) -> Result<ReportData, StorageError> {
    let (summary, details) = match report_type {
        ReportType::IncomeStatement => {
            let incomes = incomes_in_range(store, user_id, range).await?;
            let expenses = expenses_in_range(store, user_id, range).await?;
            let total_income: Decimal = incomes.iter().map(|i| i.amount).sum();
            let total_expense: Decimal = expenses.iter().map(|e| e.amount).sum();
            (
                ReportSummary::IncomeStatement {
                    total_income,
                    total_expense,
                    net_income: total_income - total_expense,
                },
                ReportDetails::Ledger { incomes, expenses },
            )
        }
        ReportType::ExpenseReport => {
            let expenses = expenses_in_range(store, user_id, range).await?;
            let total_expense: Decimal = expenses.iter().map(|e| e.amount).sum();
            (
                ReportSummary::ExpenseReport { total_expense },
                ReportDetails::Expenses(expenses),
            )
        }
        ReportType::TaxSummary => {
            let incomes = incomes_in_range(store, user_id, range).await?;
            let expenses = expenses_in_range(store, user_id, range).await?;
            let total_income: Decimal = incomes.iter().map(|i| i.amount).sum();
            let total_expense: Decimal = expenses.iter().map(|e| e.amount).sum();
            let taxable_income = total_income - total_expense;
            // Flat illustrative 10% rate; liability never goes negative.
            let tax_liability = if taxable_income > Decimal::ZERO {
                taxable_income * Decimal::new(10, 2)
            } else {
                Decimal::ZERO
            };
            (
                ReportSummary::TaxSummary {
                    total_income,
                    total_expense,
                    taxable_income,
                    tax_liability,
                },
                ReportDetails::Ledger { incomes, expenses },
            )
        }
        ReportType::BudgetAnalysis => {
            let months = months_in_range(range);
            let budgets = budgets_in_months(store, user_id, &months).await?;
            let total_budget: Decimal = budgets.iter().map(|b| b.amount).sum();
            let total_spent: Decimal = budgets.iter().map(|b| b.spent).sum();
            (
                ReportSummary::BudgetAnalysis {
                    total_budget,
                    total_spent,
                    remaining: total_budget - total_spent,
                },
                ReportDetails::Budgets(budgets),
            )
        }
        ReportType::CashFlow => {
            let incomes = incomes_in_range(store, user_id, range).await?;
            let expenses = expenses_in_range(store, user_id, range).await?;
            let total_income: Decimal = incomes.iter().map(|i| i.amount).sum();
            let total_expense: Decimal = expenses.iter().map(|e| e.amount).sum();
            let net_cash_flow = total_income - total_expense;
            (
                ReportSummary::CashFlow {
                    opening_balance: Decimal::ZERO,
                    total_income,
                    total_expense,
                    net_cash_flow,
                    closing_balance: net_cash_flow,
                },
                ReportDetails::Ledger { incomes, expenses },
            )
        }
    };

    Ok(ReportData {
        summary,
        details,
        period: range,
    })
}

async fn incomes_in_range(
    store: &Store,
    user_id: Uuid,
    range: PeriodRange,
) -> Result<Vec<Income>, StorageError> {
    let doc_keys = objects::list_documents(store, &keys::incomes_prefix(user_id)).await?;

    let mut matched = Vec::new();
    for key in &doc_keys {
        let income: Income = state::load_json(store, key).await?;
        if income.date >= range.start_date && income.date <= range.end_date {
            matched.push(income);
        }
    }
    Ok(matched)
}

async fn expenses_in_range(
    store: &Store,
    user_id: Uuid,
    range: PeriodRange,
) -> Result<Vec<Expense>, StorageError> {
    let doc_keys = objects::list_documents(store, &keys::expenses_prefix(user_id)).await?;

    let mut matched = Vec::new();
    for key in &doc_keys {
        let expense: Expense = state::load_json(store, key).await?;
        if expense.date >= range.start_date && expense.date <= range.end_date {
            matched.push(expense);
        }
    }
    Ok(matched)
}

async fn budgets_in_months(
    store: &Store,
    user_id: Uuid,
    months: &[String],
) -> Result<Vec<Budget>, StorageError> {
    let doc_keys = objects::list_documents(store, &keys::budgets_prefix(user_id)).await?;

    let mut matched = Vec::new();
    for key in &doc_keys {
        let budget: Budget = state::load_json(store, key).await?;
        if months.contains(&budget.month) {
            matched.push(budget);
        }
    }
    Ok(matched)
}
