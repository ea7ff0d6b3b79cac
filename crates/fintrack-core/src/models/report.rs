use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::budget::Budget;
use super::expense::Expense;
use super::income::Income;

/// A report generation job and its evolving record.
///
/// Created once at request time with status [`ReportStatus::Pending`], then
/// mutated only by the background generation task until it reaches a terminal
/// state. `file_name`/`file_url` are set exactly when the job completes;
/// `error_message` exactly when it fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub user_id: Uuid,
    pub report_type: ReportType,
    pub period: ReportPeriod,
    pub format: ReportFormat,
    pub status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub custom_period: Option<CustomPeriod>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub report_data: Option<ReportData>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub generated_at: Option<jiff::Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_message: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    IncomeStatement,
    ExpenseReport,
    TaxSummary,
    BudgetAnalysis,
    CashFlow,
}

impl ReportType {
    /// Human-readable title, used in the rendered document and the artifact
    /// file name.
    pub fn title(&self) -> &'static str {
        match self {
            ReportType::IncomeStatement => "Income Statement",
            ReportType::ExpenseReport => "Expense Report",
            ReportType::TaxSummary => "Tax Summary",
            ReportType::BudgetAnalysis => "Budget Analysis",
            ReportType::CashFlow => "Cash Flow Statement",
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    CurrentMonth,
    LastMonth,
    CurrentQuarter,
    LastQuarter,
    CurrentYear,
    LastYear,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Pdf,
    Excel,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    Generating,
    Completed,
    Failed,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Generating => "generating",
            ReportStatus::Completed => "completed",
            ReportStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// An inclusive calendar date range a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    pub start_date: jiff::civil::Date,
    pub end_date: jiff::civil::Date,
}

/// Caller-supplied range for [`ReportPeriod::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPeriod {
    pub start_date: jiff::civil::Date,
    pub end_date: jiff::civil::Date,
}

/// The computed payload attached to a completed job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub summary: ReportSummary,
    pub details: ReportDetails,
    pub period: PeriodRange,
}

/// Type-specific summary figures. One variant per report type, so a summary
/// for the wrong report type cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportSummary {
    IncomeStatement {
        total_income: Decimal,
        total_expense: Decimal,
        net_income: Decimal,
    },
    ExpenseReport {
        total_expense: Decimal,
    },
    TaxSummary {
        total_income: Decimal,
        total_expense: Decimal,
        taxable_income: Decimal,
        tax_liability: Decimal,
    },
    BudgetAnalysis {
        total_budget: Decimal,
        total_spent: Decimal,
        remaining: Decimal,
    },
    CashFlow {
        opening_balance: Decimal,
        total_income: Decimal,
        total_expense: Decimal,
        net_cash_flow: Decimal,
        closing_balance: Decimal,
    },
}

impl ReportSummary {
    /// Label/value pairs in presentation order, one per summary figure.
    pub fn entries(&self) -> Vec<(&'static str, Decimal)> {
        match *self {
            ReportSummary::IncomeStatement {
                total_income,
                total_expense,
                net_income,
            } => vec![
                ("Total Income", total_income),
                ("Total Expense", total_expense),
                ("Net Income", net_income),
            ],
            ReportSummary::ExpenseReport { total_expense } => {
                vec![("Total Expense", total_expense)]
            }
            ReportSummary::TaxSummary {
                total_income,
                total_expense,
                taxable_income,
                tax_liability,
            } => vec![
                ("Total Income", total_income),
                ("Total Expense", total_expense),
                ("Taxable Income", taxable_income),
                ("Tax Liability", tax_liability),
            ],
            ReportSummary::BudgetAnalysis {
                total_budget,
                total_spent,
                remaining,
            } => vec![
                ("Total Budget", total_budget),
                ("Total Spent", total_spent),
                ("Remaining", remaining),
            ],
            ReportSummary::CashFlow {
                opening_balance,
                total_income,
                total_expense,
                net_cash_flow,
                closing_balance,
            } => vec![
                ("Opening Balance", opening_balance),
                ("Total Income", total_income),
                ("Total Expense", total_expense),
                ("Net Cash Flow", net_cash_flow),
                ("Closing Balance", closing_balance),
            ],
        }
    }
}

/// Raw records the aggregator matched, kept on the job for later retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "records", rename_all = "snake_case")]
pub enum ReportDetails {
    Ledger {
        incomes: Vec<Income>,
        expenses: Vec<Expense>,
    },
    Expenses(Vec<Expense>),
    Budgets(Vec<Budget>),
}
