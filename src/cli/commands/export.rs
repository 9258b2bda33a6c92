use crate::cli::commands::{build_calendar, load, warn_orphans};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::aggregate::aggregate_with;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        force,
    } = &cli.command
    {
        let labels = cfg.labels()?;
        let calendar = build_calendar(period, &labels)?;
        let dataset = load(cli, cfg)?;

        let aggregation = aggregate_with(&dataset.teams, &calendar, &cfg.aggregate_options());
        warn_orphans(&aggregation);

        ExportLogic::export(&aggregation, *format, file, *force)?;
    }
    Ok(())
}
