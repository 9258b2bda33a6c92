use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One calendar day of the reporting period.
///
/// `weekday` and `month` are display labels produced by a
/// [`LabelProvider`](crate::core::calendar::LabelProvider) and are passed
/// through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateInfo {
    /// ISO `YYYY-MM-DD`, unique within a calendar.
    pub full_date: String,
    /// Two-character day of month ("01".."31").
    pub display_day: String,
    pub weekday: String,
    pub month: String,
    pub is_weekend: bool,
}

/// Contiguous run of calendar indices sharing the same `month` label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGroup {
    pub month: String,
    pub indices: Range<usize>,
}

impl MonthGroup {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
