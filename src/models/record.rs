use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

pub type PersonId = String;
pub type ProjectKey = String;

/// One atomic unit of logged time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub project: String,
    pub description: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    /// Hours, non-negative.
    pub time: f64,
}

// f64 has no Hash impl; hash the bit pattern so identical inputs share a key.
impl Hash for TaskRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.project.hash(state);
        self.description.hash(state);
        self.date.hash(state);
        self.time.to_bits().hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Name of the owning team (back-reference only).
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub records: Vec<TaskRecord>,
}

#[derive(Debug, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    /// Insertion order is display order.
    #[serde(default)]
    pub members: Vec<Person>,
}

/// Everything a Record Source hands to the aggregation engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl Dataset {
    pub fn record_count(&self) -> usize {
        self.teams
            .iter()
            .flat_map(|t| t.members.iter())
            .map(|p| p.records.len())
            .sum()
    }
}
