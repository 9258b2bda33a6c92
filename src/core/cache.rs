//! Memoized aggregation keyed on the content of `(teams, dates)`.

use crate::core::aggregate::{AggregateOptions, aggregate_with};
use crate::core::calendar::Calendar;
use crate::models::{Aggregation, DateInfo, Team};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Inputs of the cached aggregation. The hash is only a fast pre-check;
/// a hit also requires the stored inputs to be equal.
#[derive(Debug)]
struct Entry {
    key: u64,
    teams: Vec<Team>,
    days: Vec<DateInfo>,
    aggregation: Aggregation,
}

#[derive(Debug, Default)]
pub struct AggregateCache {
    options: AggregateOptions,
    cached: Option<Entry>,
    hits: usize,
    misses: usize,
}

impl AggregateCache {
    pub fn new(options: AggregateOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Return the aggregation for these inputs, recomputing only when their
    /// content differs from the previous call.
    pub fn get_or_compute(&mut self, teams: &[Team], calendar: &Calendar) -> &Aggregation {
        let key = content_key(teams, calendar, &self.options);

        let fresh = matches!(
            &self.cached,
            Some(e) if e.key == key && e.teams.as_slice() == teams && e.days.as_slice() == calendar.days()
        );
        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.cached = None;
        }

        let options = &self.options;
        &self
            .cached
            .get_or_insert_with(|| Entry {
                key,
                teams: teams.to_vec(),
                days: calendar.days().to_vec(),
                aggregation: aggregate_with(teams, calendar, options),
            })
            .aggregation
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}

fn content_key(teams: &[Team], calendar: &Calendar, options: &AggregateOptions) -> u64 {
    let mut hasher = DefaultHasher::new();
    teams.hash(&mut hasher);
    calendar.days().hash(&mut hasher);
    options.hash(&mut hasher);
    hasher.finish()
}
