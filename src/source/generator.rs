//! Deterministic demo dataset.
//!
//! Same seed and options always give the same dataset. Hours are whole
//! quarter-hours so sums stay exact.

use crate::errors::{AppError, AppResult};
use crate::models::{Dataset, Person, TaskRecord, Team};
use crate::utils::date::is_weekend;
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_SEED: u64 = 42;

const TEAM_NAMES: [&str; 4] = ["Alpha", "Beta", "Gamma", "Delta"];
const PROJECTS: [&str; 5] = ["Apollo", "Borealis", "Cascade", "Dynamo", "Ember"];
const TASKS: [&str; 8] = [
    "Planning",
    "Implementation",
    "Code review",
    "Testing",
    "Bug fixing",
    "Documentation",
    "Deployment",
    "Support",
];

#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub seed: u64,
    pub people_per_team: usize,
    /// Chance of logging anything on a Saturday or Sunday.
    pub weekend_ratio: f64,
}

impl GeneratorOptions {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            seed: DEFAULT_SEED,
            people_per_team: 8,
            weekend_ratio: 0.1,
        }
    }
}

/// A task that keeps being worked on for several consecutive days.
struct RunningTask {
    project: &'static str,
    description: &'static str,
    days_left: u32,
}

pub fn generate(opts: &GeneratorOptions) -> AppResult<Dataset> {
    if opts.end < opts.start {
        return Err(AppError::InvalidRange {
            start: opts.start.to_string(),
            end: opts.end.to_string(),
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(opts.seed);
    let mut teams = Vec::with_capacity(TEAM_NAMES.len());

    for team_name in TEAM_NAMES {
        let name = format!("Team {team_name}");
        let members = (0..opts.people_per_team)
            .map(|i| {
                let id = format!("{}-{}", team_name.to_lowercase(), i + 1);
                Person {
                    records: person_records(&mut rng, &id, opts),
                    id,
                    name: format!("Person {}", i + 1),
                    team: name.clone(),
                }
            })
            .collect();
        teams.push(Team { name, members });
    }

    Ok(Dataset { teams })
}

fn person_records(rng: &mut ChaCha8Rng, person_id: &str, opts: &GeneratorOptions) -> Vec<TaskRecord> {
    let mut records = Vec::new();
    let mut running: Option<RunningTask> = None;
    let mut day = opts.start;

    while day <= opts.end {
        let works = !is_weekend(day) || rng.gen_bool(opts.weekend_ratio.clamp(0.0, 1.0));

        if works {
            // 4h..8.5h in quarter-hour steps
            let mut quarters: u32 = rng.gen_range(16..=34);
            let date = day.format("%Y-%m-%d").to_string();

            let task = match running.take() {
                Some(t) if t.days_left > 0 => t,
                _ => RunningTask {
                    project: pick(rng, &PROJECTS),
                    description: pick(rng, &TASKS),
                    days_left: rng.gen_range(1..=4),
                },
            };

            let main = if quarters > 8 {
                rng.gen_range(8..=quarters)
            } else {
                quarters
            };
            records.push(record(person_id, records.len(), task.project, task.description, &date, main));
            quarters -= main;

            while quarters > 0 {
                let chunk = rng.gen_range(1..=quarters);
                records.push(record(
                    person_id,
                    records.len(),
                    pick(rng, &PROJECTS),
                    pick(rng, &TASKS),
                    &date,
                    chunk,
                ));
                quarters -= chunk;
            }

            running = Some(RunningTask {
                days_left: task.days_left - 1,
                ..task
            });
        }

        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    records
}

fn pick(rng: &mut ChaCha8Rng, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or("General")
}

fn record(
    person_id: &str,
    n: usize,
    project: &str,
    description: &str,
    date: &str,
    quarters: u32,
) -> TaskRecord {
    TaskRecord {
        id: format!("{person_id}-r{}", n + 1),
        project: project.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        time: f64::from(quarters) * 0.25,
    }
}
