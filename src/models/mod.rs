pub mod aggregated;
pub mod date_info;
pub mod record;

pub use aggregated::{
    AggregatedPerson, AggregatedProject, AggregatedTask, AggregatedTeam, Aggregation, DailyTotal,
    Diagnostics, OrphanRecordWarning,
};
pub use date_info::{DateInfo, MonthGroup};
pub use record::{Dataset, Person, PersonId, ProjectKey, TaskRecord, Team};
