pub mod calendar;
pub mod config;
pub mod export;
pub mod generate;
pub mod init;
pub mod report;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::calendar::{Calendar, LocaleLabels};
use crate::errors::AppResult;
use crate::models::{Aggregation, Dataset};
use crate::source::load_dataset;
use crate::ui::messages::{info, warning};
use crate::utils::date::current_month_period;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Dataset path: `--data` wins over the configured `data_file`.
pub(crate) fn data_path(cli: &Cli, cfg: &Config) -> PathBuf {
    match &cli.data {
        Some(p) => expand_tilde(p),
        None => cfg.data_path(),
    }
}

/// Calendar for `period`, defaulting to the current month.
pub(crate) fn build_calendar(period: &Option<String>, labels: &LocaleLabels) -> AppResult<Calendar> {
    let period = period.clone().unwrap_or_else(current_month_period);
    Calendar::from_period(&period, labels)
}

pub(crate) fn load(cli: &Cli, cfg: &Config) -> AppResult<Dataset> {
    let path = data_path(cli, cfg);
    info(format!("Loading dataset: {}", path.display()));
    load_dataset(&path)
}

/// Report records dropped for falling outside the period.
pub(crate) fn warn_orphans(aggregation: &Aggregation) {
    let count = aggregation.diagnostics.orphan_count();
    if count > 0 {
        warning(format!(
            "{count} record(s) outside the selected period were left out of the totals"
        ));
    }
}
