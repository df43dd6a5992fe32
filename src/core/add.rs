use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::insert_expense;
use crate::errors::{AppError, AppResult};
use crate::models::expense::Expense;
use crate::models::input::ExpenseInput;
use crate::models::outcome::Outcome;
use crate::utils::date;
use crate::utils::number::parse_decimal;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

/// A validated expense, ready for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl AddLogic {
    /// Validate raw input without touching the database.
    ///
    /// Checks run in this order: required fields, amount, date.
    /// Only truly empty text counts as missing; a blank amount fails parsing.
    /// An empty or missing date means `today`, any other text must be strict
    /// `YYYY-MM-DD` as typed.
    pub fn validate(input: &ExpenseInput, today: NaiveDate) -> AppResult<NewExpense> {
        if input.name.is_empty() {
            return Err(AppError::MissingField("name"));
        }
        if input.amount.is_empty() {
            return Err(AppError::MissingField("amount"));
        }

        let amount =
            parse_decimal(&input.amount).ok_or_else(|| AppError::InvalidAmount(input.amount.clone()))?;

        let date = match input.date.as_deref() {
            None | Some("") => today,
            Some(raw) => date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?,
        };

        Ok(NewExpense {
            name: input.name.clone(),
            amount,
            date,
        })
    }

    pub fn apply(pool: &mut DbPool, input: &ExpenseInput, today: NaiveDate) -> AppResult<Outcome> {
        let new = Self::validate(input, today)?;

        let id = insert_expense(&pool.conn, &new.name, new.amount, &new.date)?;

        ttlog_quiet(
            &pool.conn,
            "add",
            &new.name,
            &format!("Added {:.2} on {}", new.amount, date::format_date(&new.date)),
        );

        Ok(Outcome::ExpenseAdded {
            expense: Expense {
                id,
                name: new.name,
                amount: new.amount,
                date: new.date,
            },
        })
    }
}
