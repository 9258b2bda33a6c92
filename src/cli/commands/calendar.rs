use crate::cli::commands::build_calendar;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;

/// Handle the `calendar` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { period, json } = &cli.command {
        let labels = cfg.labels()?;
        let calendar = build_calendar(period, &labels)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(calendar.days())?);
            return Ok(());
        }

        if let (Some(first), Some(last)) = (calendar.days().first(), calendar.days().last()) {
            header(format!("{} → {}", first.full_date, last.full_date));
        }

        for group in calendar.month_groups() {
            let first = &calendar.days()[group.indices.start];
            let last = &calendar.days()[group.indices.end - 1];
            let weekend = calendar.days()[group.indices.clone()]
                .iter()
                .filter(|d| d.is_weekend)
                .count();

            println!(
                "{:<12} {} → {}  {:>2} days ({} weekend)",
                group.month,
                first.full_date,
                last.full_date,
                group.len(),
                weekend
            );
        }
    }
    Ok(())
}
