use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::source::{GeneratorOptions, generate, save_dataset};
use crate::ui::messages::success;
use crate::utils::date::{parse_period, today};
use crate::utils::path::expand_tilde;
use chrono::Datelike;

/// Handle the `generate` subcommand
pub fn handle(cli: &Cli, _cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        file,
        period,
        seed,
        people,
        force,
    } = &cli.command
    {
        let path = expand_tilde(file);
        if path.exists() && !*force {
            return Err(AppError::DataSource(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let period = period
            .clone()
            .unwrap_or_else(|| today().year().to_string());
        let (start, end) = parse_period(&period)?;

        let mut opts = GeneratorOptions::new(start, end);
        opts.seed = *seed;
        opts.people_per_team = *people;

        let dataset = generate(&opts)?;
        save_dataset(&path, &dataset)?;

        success(format!(
            "Generated {} records for {} teams: {}",
            dataset.record_count(),
            dataset.teams.len(),
            path.display()
        ));
    }
    Ok(())
}
