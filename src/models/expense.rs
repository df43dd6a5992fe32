use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Expense {
    /// Build an expense from raw column values, re-checking the stored date.
    ///
    /// Ordering by date relies on lexical comparison of the TEXT column, so a
    /// row that is not strict `YYYY-MM-DD` is reported instead of silently
    /// sorted in the wrong place.
    pub fn from_stored(id: i64, name: String, amount: f64, raw_date: String) -> AppResult<Self> {
        let date = date::parse_date(&raw_date).ok_or(AppError::CorruptRecord {
            id,
            date: raw_date,
        })?;

        Ok(Self {
            id,
            name,
            amount,
            date,
        })
    }

    pub fn date_str(&self) -> String {
        date::format_date(&self.date)
    }

    /// Axis label: date first, then the name.
    pub fn chart_label(&self) -> String {
        format!("{} {}", self.date_str(), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_stored_accepts_strict_dates() {
        let e = Expense::from_stored(3, "Rent".into(), 500.0, "2024-03-01".into()).unwrap();
        assert_eq!(e.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(e.chart_label(), "2024-03-01 Rent");
    }

    #[test]
    fn from_stored_rejects_legacy_dates() {
        let err = Expense::from_stored(7, "Tea".into(), 2.0, "2024-3-1".into()).unwrap_err();
        match err {
            AppError::CorruptRecord { id, date } => {
                assert_eq!(id, 7);
                assert_eq!(date, "2024-3-1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
