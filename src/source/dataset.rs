use crate::errors::{AppError, AppResult};
use crate::models::Dataset;
use crate::utils::path::extension;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn format_of(path: &Path) -> AppResult<Format> {
    match extension(path).as_deref() {
        Some("json") => Ok(Format::Json),
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        other => Err(AppError::DataSource(format!(
            "unsupported dataset extension {:?} for {} (use .json, .yaml or .yml)",
            other.unwrap_or(""),
            path.display()
        ))),
    }
}

/// Load teams and records from a JSON or YAML file.
///
/// Each person's `team` back-reference is filled from the enclosing team
/// when the file leaves it empty.
pub fn load_dataset(path: &Path) -> AppResult<Dataset> {
    let format = format_of(path)?;

    if !path.exists() {
        return Err(AppError::DataSource(format!(
            "dataset not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let mut dataset: Dataset = match format {
        Format::Json => serde_json::from_str(&content)?,
        Format::Yaml => serde_yaml::from_str(&content)?,
    };

    for team in &mut dataset.teams {
        for person in &mut team.members {
            if person.team.is_empty() {
                person.team = team.name.clone();
            }
        }
    }

    Ok(dataset)
}

pub fn save_dataset(path: &Path, dataset: &Dataset) -> AppResult<()> {
    let content = match format_of(path)? {
        Format::Json => serde_json::to_string_pretty(dataset)?,
        Format::Yaml => serde_yaml::to_string(dataset)?,
    };
    fs::write(path, content)?;
    Ok(())
}
