// src/export/model.rs

use crate::models::{Aggregation, DailyTotal};
use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RowLevel {
    Person,
    Project,
    Task,
}

/// One non-empty cell of the matrix, flattened for CSV.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MatrixRow {
    pub team: String,
    pub person_id: String,
    pub person: String,
    pub level: RowLevel,
    pub project: String,
    pub task: String,
    pub date: String,
    pub hours: f64,
    pub total: String,
}

/// Flatten the tree in display order: each person's cells, then for each
/// project its cells followed by its tasks' cells. Empty cells are skipped.
pub fn flatten(aggregation: &Aggregation) -> Vec<MatrixRow> {
    let mut rows = Vec::new();

    for team in &aggregation.teams {
        for person in &team.members {
            let row = |level: RowLevel, project: &str, task: &str, t: &DailyTotal| MatrixRow {
                team: team.name.clone(),
                person_id: person.id.clone(),
                person: person.name.clone(),
                level,
                project: project.to_string(),
                task: task.to_string(),
                date: t.date.clone(),
                hours: t.hours,
                total: t.display.clone(),
            };

            for t in person.daily_totals.iter().filter(|t| !t.is_empty()) {
                rows.push(row(RowLevel::Person, "", "", t));
            }

            for project in &person.projects {
                for t in project.daily_totals.iter().filter(|t| !t.is_empty()) {
                    rows.push(row(RowLevel::Project, &project.project, "", t));
                }
                for task in &project.tasks {
                    for t in task.daily_totals.iter().filter(|t| !t.is_empty()) {
                        rows.push(row(RowLevel::Task, &project.project, &task.description, t));
                    }
                }
            }
        }
    }

    rows
}
