use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_limit, replace_limit, sum_for_month};
use crate::errors::{AppError, AppResult};
use crate::models::input::LimitInput;
use crate::models::outcome::Outcome;
use crate::utils::date;
use crate::utils::number::parse_decimal;

/// Monthly limit: set, show and check against the month's spending.
pub struct LimitLogic;

impl LimitLogic {
    pub fn set(pool: &mut DbPool, input: &LimitInput) -> AppResult<Outcome> {
        let limit =
            parse_decimal(&input.limit).ok_or_else(|| AppError::InvalidLimit(input.limit.clone()))?;

        pool.with_conn(|conn| replace_limit(conn, limit))?;

        ttlog_quiet(
            &pool.conn,
            "limit",
            "",
            &format!("Monthly limit set to {:.2}", limit),
        );

        Ok(Outcome::LimitSet { limit })
    }

    pub fn show(pool: &mut DbPool) -> AppResult<Outcome> {
        Ok(match load_limit(&pool.conn)? {
            Some(limit) => Outcome::LimitShown { limit },
            None => Outcome::NoLimitSet,
        })
    }

    /// Compare the total of `year_month` (current month when `None`) with the limit.
    ///
    /// Spending exactly the limit is still within it.
    pub fn check(pool: &mut DbPool, year_month: Option<&str>) -> AppResult<Outcome> {
        let month = match year_month {
            Some(m) => date::parse_year_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string()))?,
            None => date::current_year_month(),
        };

        let total = sum_for_month(&pool.conn, &month)?;

        let Some(limit) = load_limit(&pool.conn)? else {
            return Ok(Outcome::NoLimitSet);
        };

        if total > limit {
            Ok(Outcome::LimitExceeded {
                month,
                total,
                limit,
            })
        } else {
            Ok(Outcome::WithinLimit {
                month,
                total,
                limit,
            })
        }
    }
}
