use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::models::input::ExpenseInput;
use crate::ui::messages::report;
use crate::utils::date;

/// Record a new expense.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name, amount, date: d } = cmd {
        let input = ExpenseInput::new(name.as_str(), amount.as_str(), d.clone());

        let mut pool = open_store(&cfg.database)?;
        let outcome = AddLogic::apply(&mut pool, &input, date::today())?;
        pool.close()?;

        report(&outcome, &cfg.currency_symbol);
    }

    Ok(())
}
