use crate::db::pool::DbPool;
use crate::db::queries::{count_expenses, count_limits, load_limit, sum_for_month};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW, color_for_total};
use crate::utils::date;
use crate::utils::formatting::format_money;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str, currency: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL EXPENSES
    //
    let count = count_expenses(&pool.conn)?;
    println!(
        "{}• Total expenses:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DATE RANGE
    //
    let (first_date, last_date): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            "SELECT MIN(date), MAX(date) FROM expenses",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) LIMIT AND CURRENT MONTH
    //
    let limit = load_limit(&pool.conn)?;
    let month = date::current_year_month();
    let total = sum_for_month(&pool.conn, &month)?;

    let fmt_limit = limit
        .map(|l| format_money(l, currency))
        .unwrap_or_else(|| format!("{GREY}not set{RESET}"));
    println!("{}• Monthly limit:{} {}", CYAN, RESET, fmt_limit);
    println!(
        "{}• Spent in {}:{} {}{}{}",
        CYAN,
        month,
        RESET,
        color_for_total(total, limit),
        format_money(total, currency),
        RESET
    );

    if count_limits(&pool.conn)? > 1 {
        println!(
            "{}• Note:{} settings holds more than one limit row; the newest is used",
            CYAN, RESET
        );
    }

    println!();
    Ok(())
}
