#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimegrid::models::{Dataset, Person, TaskRecord, Team};
use rtimegrid::source::save_dataset;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtg() -> Command {
    cargo_bin_cmd!("rtimegrid")
}

/// Create a temporary file path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimegrid.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist, so the CLI runs on defaults
pub fn missing_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}

pub fn rec(id: &str, project: &str, description: &str, date: &str, time: f64) -> TaskRecord {
    TaskRecord {
        id: id.to_string(),
        project: project.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        time,
    }
}

pub fn person(id: &str, name: &str, team: &str, records: Vec<TaskRecord>) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        team: team.to_string(),
        records,
    }
}

pub fn team(name: &str, members: Vec<Person>) -> Team {
    Team {
        name: name.to_string(),
        members,
    }
}

/// Two teams, three people, a handful of records in January 2024
/// plus one record outside it.
pub fn sample_teams() -> Vec<Team> {
    vec![
        team(
            "Team Alpha",
            vec![
                person(
                    "alpha-1",
                    "Anna",
                    "Team Alpha",
                    vec![
                        rec("r1", "Apollo", "Planning", "2024-01-01", 3.0),
                        rec("r2", "Apollo", "Review", "2024-01-01", 2.0),
                        rec("r3", "Borealis", "Support", "2024-01-02", 4.5),
                        rec("r4", "Apollo", "Planning", "2024-01-02", 1.25),
                        rec("r5", "Apollo", "Planning", "2025-03-01", 8.0),
                    ],
                ),
                person("alpha-2", "Bruno", "Team Alpha", vec![]),
            ],
        ),
        team(
            "Team Beta",
            vec![person(
                "beta-1",
                "Carla",
                "Team Beta",
                vec![rec("r6", "Cascade", "Testing", "2024-01-03", 7.5)],
            )],
        ),
    ]
}

/// Write the sample dataset to a temp JSON file and return its path
pub fn write_sample_dataset(name: &str) -> String {
    let path = temp_path(name, "json");
    let dataset = Dataset {
        teams: sample_teams(),
    };
    save_dataset(std::path::Path::new(&path), &dataset).expect("write dataset");
    path
}
