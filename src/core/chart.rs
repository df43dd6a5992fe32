use crate::db::pool::DbPool;
use crate::db::queries::load_expenses;
use crate::errors::AppResult;
use crate::models::chart::{ChartPoint, ChartSeries};
use crate::models::expense::Expense;
use crate::models::outcome::Outcome;

pub const CHART_TITLE: &str = "Expense Chart";

/// Builds the chart series handed to a renderer.
pub struct ChartLogic;

impl ChartLogic {
    pub fn series_from(expenses: &[Expense], currency: &str) -> ChartSeries {
        ChartSeries {
            title: CHART_TITLE.to_string(),
            y_label: format!("Expense Amount ({})", currency),
            points: expenses
                .iter()
                .map(|e| ChartPoint {
                    label: e.chart_label(),
                    value: e.amount,
                })
                .collect(),
        }
    }

    /// One point per stored expense, in ascending date order.
    pub fn build_series(pool: &mut DbPool, currency: &str) -> AppResult<Outcome> {
        let expenses = load_expenses(&pool.conn)?;

        if expenses.is_empty() {
            return Ok(Outcome::NoExpenses);
        }

        Ok(Outcome::Chart(Self::series_from(&expenses, currency)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::insert_expense;
    use crate::utils::date::parse_date;

    fn store() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool
    }

    #[test]
    fn empty_store_has_nothing_to_chart() {
        let mut pool = store();
        assert_eq!(
            ChartLogic::build_series(&mut pool, "₹").unwrap(),
            Outcome::NoExpenses
        );
    }

    #[test]
    fn points_follow_date_order_and_combine_date_and_name() {
        let mut pool = store();
        insert_expense(&pool.conn, "Groceries", 45.5, &parse_date("2024-03-05").unwrap()).unwrap();
        insert_expense(&pool.conn, "Rent", 500.0, &parse_date("2024-03-01").unwrap()).unwrap();

        let Outcome::Chart(series) = ChartLogic::build_series(&mut pool, "₹").unwrap() else {
            panic!("expected a chart");
        };

        assert_eq!(series.title, "Expense Chart");
        assert_eq!(series.y_label, "Expense Amount (₹)");
        assert_eq!(
            series.points,
            vec![
                ChartPoint {
                    label: "2024-03-01 Rent".into(),
                    value: 500.0
                },
                ChartPoint {
                    label: "2024-03-05 Groceries".into(),
                    value: 45.5
                },
            ]
        );
    }
}
