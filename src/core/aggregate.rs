//! Aggregation engine: teams + calendar → team/person/project/task tree
//! with per-day totals.
//!
//! Raw sums are built bottom-up. Task sums come from records, project sums
//! add task sums in group order, person sums add project sums in group
//! order. Every level is formatted exactly once from its own raw sum, so
//! person = Σ projects = Σ tasks holds on raw and formatted values alike.

use crate::core::calendar::Calendar;
use crate::core::grouping::OrderedMultimap;
use crate::models::{
    AggregatedPerson, AggregatedProject, AggregatedTask, AggregatedTeam, Aggregation, DailyTotal,
    Diagnostics, OrphanRecordWarning, Person, TaskRecord, Team,
};
use crate::utils::formatting::{format_hours, format_hours_with_suffix};

pub const DEFAULT_HOURS_SUFFIX: &str = "h";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregateOptions {
    /// Unit appended to task-level totals ("3.00 h").
    pub hours_suffix: String,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            hours_suffix: DEFAULT_HOURS_SUFFIX.to_string(),
        }
    }
}

/// Aggregate with the default options.
pub fn aggregate(teams: &[Team], calendar: &Calendar) -> Aggregation {
    aggregate_with(teams, calendar, &AggregateOptions::default())
}

pub fn aggregate_with(teams: &[Team], calendar: &Calendar, opts: &AggregateOptions) -> Aggregation {
    let mut diagnostics = Diagnostics::default();

    let teams = teams
        .iter()
        .map(|team| AggregatedTeam {
            name: team.name.clone(),
            members: team
                .members
                .iter()
                .map(|person| aggregate_person(team, person, calendar, opts, &mut diagnostics))
                .collect(),
        })
        .collect();

    Aggregation { teams, diagnostics }
}

fn aggregate_person(
    team: &Team,
    person: &Person,
    calendar: &Calendar,
    opts: &AggregateOptions,
    diagnostics: &mut Diagnostics,
) -> AggregatedPerson {
    let mut by_project: OrderedMultimap<&str, &TaskRecord> = OrderedMultimap::new();

    for record in &person.records {
        if calendar.contains(&record.date) {
            by_project.push(record.project.as_str(), record);
        } else {
            diagnostics.orphans.push(OrphanRecordWarning {
                team: team.name.clone(),
                person_id: person.id.clone(),
                record_id: record.id.clone(),
                date: record.date.clone(),
            });
        }
    }

    let mut person_sums = vec![0.0; calendar.len()];
    let mut projects = Vec::with_capacity(by_project.len());

    for (project, records) in by_project.iter() {
        let by_task: OrderedMultimap<&str, &TaskRecord> = records
            .iter()
            .map(|r| (r.description.as_str(), *r))
            .collect();

        let mut project_sums = vec![0.0; calendar.len()];
        let mut tasks = Vec::with_capacity(by_task.len());

        for (description, task_records) in by_task.iter() {
            let task_sums = record_sums(task_records, calendar);
            add_into(&mut project_sums, &task_sums);

            tasks.push(AggregatedTask {
                description: description.to_string(),
                records: task_records.iter().map(|r| (*r).clone()).collect(),
                daily_totals: totals(calendar, &task_sums, |h| {
                    format_hours_with_suffix(h, &opts.hours_suffix)
                }),
            });
        }

        add_into(&mut person_sums, &project_sums);

        projects.push(AggregatedProject {
            project: project.to_string(),
            tasks,
            daily_totals: totals(calendar, &project_sums, format_hours),
        });
    }

    AggregatedPerson {
        id: person.id.clone(),
        name: person.name.clone(),
        team: team.name.clone(),
        daily_totals: totals(calendar, &person_sums, format_hours),
        projects,
    }
}

fn record_sums(records: &[&TaskRecord], calendar: &Calendar) -> Vec<f64> {
    let mut sums = vec![0.0; calendar.len()];
    for record in records {
        if let Some(i) = calendar.index_of(&record.date) {
            sums[i] += record.time;
        }
    }
    sums
}

fn add_into(acc: &mut [f64], part: &[f64]) {
    for (a, p) in acc.iter_mut().zip(part) {
        *a += p;
    }
}

fn totals(calendar: &Calendar, sums: &[f64], fmt: impl Fn(f64) -> String) -> Vec<DailyTotal> {
    calendar
        .days()
        .iter()
        .zip(sums)
        .map(|(day, &hours)| DailyTotal {
            date: day.full_date.clone(),
            hours,
            display: fmt(hours),
        })
        .collect()
}
