use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::limit::LimitLogic;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::models::input::LimitInput;
use crate::ui::messages::report;

/// Handle the `limit` subcommand.
///
/// `--set` runs before `--check`, so both can be combined; with no flag the
/// current limit is shown.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Limit {
        set,
        check,
        month,
        show,
    } = cmd
    {
        let mut pool = open_store(&cfg.database)?;
        let mut outcomes = Vec::new();

        if let Some(value) = set {
            outcomes.push(LimitLogic::set(&mut pool, &LimitInput::new(value.as_str()))?);
        }
        if *show || (set.is_none() && !*check) {
            outcomes.push(LimitLogic::show(&mut pool)?);
        }
        if *check {
            outcomes.push(LimitLogic::check(&mut pool, month.as_deref())?);
        }

        pool.close()?;

        for outcome in &outcomes {
            report(outcome, &cfg.currency_symbol);
        }
    }

    Ok(())
}
