use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::ChartLogic;
use crate::db::initialize::open_store;
use crate::errors::AppResult;
use crate::models::outcome::Outcome;
use crate::ui::chart::{ChartRenderer, TerminalBarChart};
use crate::ui::messages::report;
use std::io::{self, Write};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Chart) {
        let mut pool = open_store(&cfg.database)?;
        let outcome = ChartLogic::build_series(&mut pool, &cfg.currency_symbol)?;
        pool.close()?;

        if let Outcome::Chart(series) = &outcome {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            TerminalBarChart::new(cfg.chart_width).render(series, &mut out)?;
            out.flush()?;
        }
        report(&outcome, &cfg.currency_symbol);
    }

    Ok(())
}
