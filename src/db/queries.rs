use crate::errors::AppResult;
use crate::models::expense::Expense;
use crate::utils::date;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};

type RawExpense = (i64, String, f64, String);

fn raw_row(row: &Row) -> rusqlite::Result<RawExpense> {
    Ok((
        row.get("id")?,
        row.get("name")?,
        row.get("amount")?,
        row.get("date")?,
    ))
}

fn collect_expenses(
    rows: impl Iterator<Item = rusqlite::Result<RawExpense>>,
) -> AppResult<Vec<Expense>> {
    let mut out = Vec::new();
    for r in rows {
        let (id, name, amount, raw_date) = r?;
        out.push(Expense::from_stored(id, name, amount, raw_date)?);
    }
    Ok(out)
}

/// LIKE pattern matching every date of a `YYYY-MM` month.
fn month_pattern(year_month: &str) -> String {
    format!("{}-%", year_month)
}

/// Insert a new expense and return its store-assigned id.
pub fn insert_expense(conn: &Connection, name: &str, amount: f64, d: &NaiveDate) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO expenses (name, amount, date)
         VALUES (?1, ?2, ?3)",
    )?;
    stmt.execute(params![name, amount, date::format_date(d)])?;
    Ok(conn.last_insert_rowid())
}

/// All expenses, oldest date first.
pub fn load_expenses(conn: &Connection) -> AppResult<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, amount, date FROM expenses
         ORDER BY date ASC, id ASC",
    )?;
    let rows = stmt.query_map([], raw_row)?;
    collect_expenses(rows)
}

/// Expenses of one `YYYY-MM` month, oldest date first.
pub fn load_expenses_for_month(conn: &Connection, year_month: &str) -> AppResult<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, amount, date FROM expenses
         WHERE date LIKE ?1
         ORDER BY date ASC, id ASC",
    )?;
    let rows = stmt.query_map([month_pattern(year_month)], raw_row)?;
    collect_expenses(rows)
}

/// Sum of the amounts dated within `year_month`; 0 when there are none.
pub fn sum_for_month(conn: &Connection, year_month: &str) -> AppResult<f64> {
    let total: f64 = conn.query_row(
        "SELECT COALESCE(SUM(amount), 0.0) FROM expenses WHERE date LIKE ?1",
        [month_pattern(year_month)],
        |row| row.get(0),
    )?;
    Ok(total)
}

pub fn count_expenses(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?)
}

/// Replace the stored limit: delete-then-insert in one transaction.
pub fn replace_limit(conn: &mut Connection, value: f64) -> AppResult<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM settings", [])?;
    tx.execute(
        "INSERT INTO settings (expense_limit) VALUES (?1)",
        params![value],
    )?;
    tx.commit()?;
    Ok(())
}

/// The current limit, `None` when it was never set.
pub fn load_limit(conn: &Connection) -> AppResult<Option<f64>> {
    let limit = conn
        .query_row(
            "SELECT expense_limit FROM settings ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    Ok(limit)
}

pub fn count_limits(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM settings", [], |row| row.get(0))?)
}

/// Rows whose `date` is not a strict `YYYY-MM-DD` value.
pub fn find_malformed_dates(conn: &Connection) -> AppResult<Vec<(i64, String)>> {
    let mut stmt = conn.prepare("SELECT id, date FROM expenses ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        let (id, raw) = r?;
        if date::parse_date(&raw).is_none() {
            out.push((id, raw));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::pool::DbPool;
    use crate::errors::AppError;

    fn store() -> DbPool {
        let pool = DbPool::in_memory().unwrap();
        init_db(&pool.conn).unwrap();
        pool
    }

    fn d(s: &str) -> NaiveDate {
        date::parse_date(s).unwrap()
    }

    #[test]
    fn scenario_rent_and_groceries() {
        let pool = store();
        insert_expense(&pool.conn, "Groceries", 45.50, &d("2024-03-05")).unwrap();
        insert_expense(&pool.conn, "Rent", 500.00, &d("2024-03-01")).unwrap();

        let total = sum_for_month(&pool.conn, "2024-03").unwrap();
        assert!((total - 545.50).abs() < 1e-9);

        let names: Vec<String> = load_expenses(&pool.conn)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Rent", "Groceries"]);
    }

    #[test]
    fn ids_are_monotonic() {
        let pool = store();
        let a = insert_expense(&pool.conn, "a", 1.0, &d("2024-01-01")).unwrap();
        let b = insert_expense(&pool.conn, "b", 1.0, &d("2023-01-01")).unwrap();
        assert!(b > a);
    }

    #[test]
    fn list_is_sorted_and_contains_every_insert() {
        let pool = store();
        let inputs = [
            ("Coffee", 3.2, "2024-02-29"),
            ("Books", 20.0, "2023-12-31"),
            ("Taxi", 14.75, "2024-01-15"),
            ("Lunch", 9.0, "2024-01-15"),
        ];
        for (name, amount, day) in inputs {
            insert_expense(&pool.conn, name, amount, &d(day)).unwrap();
        }

        let list = load_expenses(&pool.conn).unwrap();
        assert_eq!(list.len(), inputs.len());
        assert!(list.windows(2).all(|w| w[0].date <= w[1].date));
        for (name, amount, day) in inputs {
            assert!(
                list.iter()
                    .any(|e| e.name == name && e.amount == amount && e.date_str() == day)
            );
        }
        // same day keeps insertion order
        let jan: Vec<&str> = list
            .iter()
            .filter(|e| e.date_str() == "2024-01-15")
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(jan, vec!["Taxi", "Lunch"]);
    }

    #[test]
    fn month_sum_ignores_other_months_and_defaults_to_zero() {
        let pool = store();
        insert_expense(&pool.conn, "Feb", 10.0, &d("2024-02-29")).unwrap();
        insert_expense(&pool.conn, "Mar", 20.0, &d("2024-03-01")).unwrap();
        insert_expense(&pool.conn, "Mar", 5.25, &d("2024-03-31")).unwrap();
        insert_expense(&pool.conn, "Mar-2023", 99.0, &d("2023-03-15")).unwrap();

        assert_eq!(sum_for_month(&pool.conn, "2024-03").unwrap(), 25.25);
        assert_eq!(sum_for_month(&pool.conn, "2024-02").unwrap(), 10.0);
        assert_eq!(sum_for_month(&pool.conn, "2024-04").unwrap(), 0.0);

        let march = load_expenses_for_month(&pool.conn, "2024-03").unwrap();
        assert_eq!(march.len(), 2);
    }

    #[test]
    fn limit_is_a_single_row() {
        let mut pool = store();
        assert_eq!(load_limit(&pool.conn).unwrap(), None);

        replace_limit(&mut pool.conn, 400.0).unwrap();
        replace_limit(&mut pool.conn, 250.0).unwrap();

        assert_eq!(count_limits(&pool.conn).unwrap(), 1);
        assert_eq!(load_limit(&pool.conn).unwrap(), Some(250.0));
    }

    #[test]
    fn malformed_stored_dates_are_reported() {
        let pool = store();
        insert_expense(&pool.conn, "ok", 1.0, &d("2024-03-01")).unwrap();
        pool.conn
            .execute(
                "INSERT INTO expenses (name, amount, date) VALUES ('bad', 1.0, '2024-3-9')",
                [],
            )
            .unwrap();

        let bad = find_malformed_dates(&pool.conn).unwrap();
        assert_eq!(bad, vec![(2, "2024-3-9".to_string())]);

        let err = load_expenses(&pool.conn).unwrap_err();
        assert!(matches!(err, AppError::CorruptRecord { id: 2, .. }));
    }
}
