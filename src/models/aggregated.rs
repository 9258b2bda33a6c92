use super::record::TaskRecord;
use serde::Serialize;

/// Total for one (entity, day) pair.
///
/// `hours` is the raw sum of record times; `display` is that sum formatted
/// once to two decimals, or empty when it rounds to zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: String,
    pub hours: f64,
    pub display: String,
}

impl DailyTotal {
    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }
}

/// One `description` group under a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedTask {
    pub description: String,
    pub records: Vec<TaskRecord>,
    pub daily_totals: Vec<DailyTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedProject {
    pub project: String,
    pub tasks: Vec<AggregatedTask>,
    pub daily_totals: Vec<DailyTotal>,
}

impl AggregatedProject {
    pub fn task(&self, description: &str) -> Option<&AggregatedTask> {
        self.tasks.iter().find(|t| t.description == description)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedPerson {
    pub id: String,
    pub name: String,
    pub team: String,
    pub daily_totals: Vec<DailyTotal>,
    pub projects: Vec<AggregatedProject>,
}

impl AggregatedPerson {
    pub fn project(&self, key: &str) -> Option<&AggregatedProject> {
        self.projects.iter().find(|p| p.project == key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedTeam {
    pub name: String,
    pub members: Vec<AggregatedPerson>,
}

/// A record whose date is outside the calendar. Non-fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrphanRecordWarning {
    pub team: String,
    pub person_id: String,
    pub record_id: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    pub orphans: Vec<OrphanRecordWarning>,
}

impl Diagnostics {
    pub fn orphan_count(&self) -> usize {
        self.orphans.len()
    }

    pub fn is_clean(&self) -> bool {
        self.orphans.is_empty()
    }
}

/// Result of one aggregation pass: the team tree plus non-fatal diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregation {
    pub teams: Vec<AggregatedTeam>,
    pub diagnostics: Diagnostics,
}

impl Aggregation {
    /// Locate a person by id, together with the team it belongs to.
    pub fn find_person(&self, id: &str) -> Option<(&AggregatedTeam, &AggregatedPerson)> {
        self.teams.iter().find_map(|team| {
            team.members
                .iter()
                .find(|p| p.id == id)
                .map(|person| (team, person))
        })
    }
}
