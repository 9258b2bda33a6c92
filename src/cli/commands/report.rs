use crate::cli::commands::{build_calendar, load, warn_orphans};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::cache::AggregateCache;
use crate::core::disclosure::{Disclosure, DisclosureEvent, HoverEntry};
use crate::errors::{AppError, AppResult};
use crate::render::{RenderOptions, render};
use crate::ui::messages::warning;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        period,
        expand,
        project,
        hover,
        no_color,
    } = &cli.command
    {
        let labels = cfg.labels()?;
        let calendar = build_calendar(period, &labels)?;
        let dataset = load(cli, cfg)?;

        let mut cache = AggregateCache::new(cfg.aggregate_options());
        let aggregation = cache.get_or_compute(&dataset.teams, &calendar);
        warn_orphans(aggregation);

        let mut disclosure = Disclosure::new();
        let events = expand
            .iter()
            .map(|id| DisclosureEvent::TogglePerson(id.clone()))
            .chain(
                project
                    .iter()
                    .map(|key| DisclosureEvent::ToggleProject(key.clone())),
            );
        for event in events {
            disclosure.apply(event);
        }

        if let Some(target) = hover {
            let (person_id, date) = target.split_once('@').ok_or_else(|| {
                AppError::Other(format!("--hover expects PERSON_ID@YYYY-MM-DD, got '{target}'"))
            })?;

            match HoverEntry::for_person_cell(aggregation, &calendar, person_id, date) {
                Some(entry) => {
                    disclosure.schedule_hover(entry);
                    disclosure.tick();
                }
                None => warning(format!("No cell for '{person_id}' on {date}")),
            }
        }

        let opts = RenderOptions {
            color: !*no_color,
            label_width: cfg.label_width,
            cell_width: cfg.cell_width,
            scale: cfg.colors,
            hours_suffix: cfg.hours_suffix.clone(),
        };

        print!(
            "{}",
            render(aggregation, &calendar, &disclosure, &labels, &opts)
        );
    }
    Ok(())
}
