use crate::models::chart::ChartSeries;
use crate::models::expense::Expense;
use crate::utils::formatting::format_money;

/// How an outcome should be presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
}

/// Result of a controller flow.
///
/// Validation and storage failures travel as `AppError`; everything the user
/// should simply be told about is an `Outcome`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    ExpenseAdded {
        expense: Expense,
    },
    LimitSet {
        limit: f64,
    },
    LimitShown {
        limit: f64,
    },
    NoLimitSet,
    WithinLimit {
        month: String,
        total: f64,
        limit: f64,
    },
    LimitExceeded {
        month: String,
        total: f64,
        limit: f64,
    },
    Chart(ChartSeries),
    NoExpenses,
}

impl Outcome {
    pub fn severity(&self) -> Severity {
        match self {
            Outcome::ExpenseAdded { .. } | Outcome::LimitSet { .. } => Severity::Success,
            Outcome::LimitExceeded { .. } => Severity::Warning,
            Outcome::LimitShown { .. }
            | Outcome::NoLimitSet
            | Outcome::WithinLimit { .. }
            | Outcome::Chart(_)
            | Outcome::NoExpenses => Severity::Info,
        }
    }

    /// Human readable text, amounts prefixed with `currency`.
    pub fn message(&self, currency: &str) -> String {
        match self {
            Outcome::ExpenseAdded { expense } => {
                format!("Expense '{}' added successfully!", expense.name)
            }
            Outcome::LimitSet { limit } => {
                format!("Monthly limit set to {}", format_money(*limit, currency))
            }
            Outcome::LimitShown { limit } => {
                format!("Current monthly limit: {}", format_money(*limit, currency))
            }
            Outcome::NoLimitSet => "No limit set. Please set a monthly limit first.".to_string(),
            Outcome::WithinLimit {
                month,
                total,
                limit,
            } => format!(
                "Total expenses for {}: {}\nLimit: {}",
                month,
                format_money(*total, currency),
                format_money(*limit, currency)
            ),
            Outcome::LimitExceeded {
                month,
                total,
                limit,
            } => format!(
                "Total expenses for {}: {}\nLimit: {}\nYou have exceeded your limit!",
                month,
                format_money(*total, currency),
                format_money(*limit, currency)
            ),
            Outcome::Chart(series) => format!("{} ({} expenses)", series.title, series.points.len()),
            Outcome::NoExpenses => "No expenses to display.".to_string(),
        }
    }
}
