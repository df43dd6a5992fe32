use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::open_store;
use crate::db::queries::{load_expenses, load_expenses_for_month};
use crate::errors::{AppError, AppResult};
use crate::models::expense::Expense;
use crate::ui::messages::info;
use crate::utils::colors::colorize_amount;
use crate::utils::date;
use crate::utils::format_money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let month = month
            .as_deref()
            .map(|m| date::parse_year_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string())))
            .transpose()?;

        let pool = open_store(&cfg.database)?;
        let expenses = match &month {
            Some(m) => load_expenses_for_month(&pool.conn, m)?,
            None => load_expenses(&pool.conn)?,
        };
        pool.close()?;

        if expenses.is_empty() {
            match &month {
                Some(m) => info(format!("No expenses for {}.", m)),
                None => info("No expenses to display."),
            }
            return Ok(());
        }

        match &month {
            Some(m) => println!("📅 Expenses for {}:\n", m),
            None => println!("📅 All expenses:\n"),
        }
        print!("{}", render(&expenses, &cfg.currency_symbol));
    }

    Ok(())
}

fn render(expenses: &[Expense], currency: &str) -> String {
    let mut table = Table::new(vec![
        Column::right("ID"),
        Column::left("Date"),
        Column::left("Name"),
        Column::right("Amount"),
    ]);

    for e in expenses {
        table.add_row(vec![
            e.id.to_string(),
            e.date_str(),
            e.name.clone(),
            format_money(e.amount, currency),
        ]);
    }

    let total: f64 = expenses.iter().map(|e| e.amount).sum();
    let mut out = table.render();
    out.push_str(&format!(
        "\nTotal: {}\n",
        colorize_amount(&format_money(total, currency), total)
    ));
    out
}
