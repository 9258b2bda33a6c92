//! Disclosure state: which person / project row is expanded, and which
//! person cell is hovered.
//!
//! At most one person is expanded, and a project can only be expanded
//! under that person. Switching person always collapses the open project.
//! Hover is independent of expansion.

use crate::core::calendar::{Calendar, LabelProvider};
use crate::models::{Aggregation, PersonId, ProjectKey};
use crate::utils::date::parse_date;
use chrono::Datelike;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Expansion {
    #[default]
    Collapsed,
    Person {
        id: PersonId,
        project: Option<ProjectKey>,
    },
}

/// Transient information about the hovered person/day cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoverEntry {
    pub team_name: String,
    pub person_name: String,
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    /// Displayed total of the cell; empty when nothing was logged.
    pub time: String,
    pub column_index: usize,
}

impl HoverEntry {
    /// Entry for the cell of `person_id` on `date`, if both exist.
    pub fn for_person_cell(
        aggregation: &Aggregation,
        calendar: &Calendar,
        person_id: &str,
        date: &str,
    ) -> Option<Self> {
        let (team, person) = aggregation.find_person(person_id)?;
        let column_index = calendar.index_of(date)?;
        let total = person.daily_totals.get(column_index)?;

        Some(Self {
            team_name: team.name.clone(),
            person_name: person.name.clone(),
            date: date.to_string(),
            time: total.display.clone(),
            column_index,
        })
    }

    /// Tooltip text: team, person, long date and hours on separate lines.
    pub fn tooltip(&self, labels: &dyn LabelProvider, suffix: &str) -> String {
        let date = match parse_date(&self.date) {
            Some(d) => format!("{} {} {}", d.day(), labels.month(d), d.year()),
            None => self.date.clone(),
        };
        let time = if self.time.is_empty() {
            "0.00"
        } else {
            self.time.as_str()
        };
        format!(
            "{}\n{}\n{}\n{} {}",
            self.team_name, self.person_name, date, time, suffix
        )
    }
}

/// A user interaction, for hosts that queue mutations through one writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisclosureEvent {
    TogglePerson(PersonId),
    ToggleProject(ProjectKey),
    Hover(HoverEntry),
    Unhover,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingHover {
    Show(HoverEntry),
    Hide,
}

#[derive(Debug, Clone, Default)]
pub struct Disclosure {
    expansion: Expansion,
    hover: Option<HoverEntry>,
    pending: Option<PendingHover>,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_person(&mut self, id: &str) {
        self.expansion = match &self.expansion {
            Expansion::Person { id: current, .. } if current == id => Expansion::Collapsed,
            _ => Expansion::Person {
                id: id.to_string(),
                project: None,
            },
        };
    }

    /// No effect while no person is expanded.
    pub fn toggle_project(&mut self, key: &str) {
        if let Expansion::Person { project, .. } = &mut self.expansion {
            *project = if project.as_deref() == Some(key) {
                None
            } else {
                Some(key.to_string())
            };
        }
    }

    /// Show `entry` now. Cancels any scheduled hover update.
    pub fn hover(&mut self, entry: HoverEntry) {
        self.pending = None;
        self.hover = Some(entry);
    }

    pub fn unhover(&mut self) {
        self.pending = None;
        self.hover = None;
    }

    /// Queue a hover update for the next [`tick`](Self::tick), replacing
    /// any update still waiting.
    pub fn schedule_hover(&mut self, entry: HoverEntry) {
        self.pending = Some(PendingHover::Show(entry));
    }

    pub fn schedule_unhover(&mut self) {
        self.pending = Some(PendingHover::Hide);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply the pending hover update, if any. Returns true when the
    /// visible hover changed.
    pub fn tick(&mut self) -> bool {
        let next = match self.pending.take() {
            Some(PendingHover::Show(entry)) => Some(entry),
            Some(PendingHover::Hide) => None,
            None => return false,
        };
        let changed = self.hover != next;
        self.hover = next;
        changed
    }

    pub fn apply(&mut self, event: DisclosureEvent) {
        match event {
            DisclosureEvent::TogglePerson(id) => self.toggle_person(&id),
            DisclosureEvent::ToggleProject(key) => self.toggle_project(&key),
            DisclosureEvent::Hover(entry) => self.hover(entry),
            DisclosureEvent::Unhover => self.unhover(),
        }
    }

    pub fn expansion(&self) -> &Expansion {
        &self.expansion
    }

    pub fn expanded_person(&self) -> Option<&str> {
        match &self.expansion {
            Expansion::Person { id, .. } => Some(id.as_str()),
            Expansion::Collapsed => None,
        }
    }

    pub fn expanded_project(&self) -> Option<&str> {
        match &self.expansion {
            Expansion::Person { project, .. } => project.as_deref(),
            Expansion::Collapsed => None,
        }
    }

    pub fn is_person_expanded(&self, id: &str) -> bool {
        self.expanded_person() == Some(id)
    }

    pub fn is_project_expanded(&self, key: &str) -> bool {
        self.expanded_project() == Some(key)
    }

    pub fn hover_entry(&self) -> Option<&HoverEntry> {
        self.hover.as_ref()
    }
}
