//! Calendar model: the ordered, contiguous day sequence of a reporting period.

use crate::errors::{AppError, AppResult};
use crate::models::{DateInfo, MonthGroup};
use crate::utils::date::{is_weekend, parse_date, parse_period};
use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};
use std::collections::HashMap;

/// Locale-formatting collaborator: supplies weekday and month labels.
///
/// The calendar never interprets the returned strings; it only compares
/// month labels for equality when building header groups.
pub trait LabelProvider {
    fn weekday(&self, date: NaiveDate) -> String;
    fn month(&self, date: NaiveDate) -> String;
}

/// Labels formatted through chrono's locale tables (`%a` / `%B`).
#[derive(Debug, Clone, Copy)]
pub struct LocaleLabels {
    locale: Locale,
}

impl LocaleLabels {
    /// Build from a locale name such as `en_US` or `ru_RU`.
    pub fn new(name: &str) -> AppResult<Self> {
        let locale =
            Locale::try_from(name).map_err(|_| AppError::UnknownLocale(name.to_string()))?;
        Ok(Self { locale })
    }

    fn format(&self, date: NaiveDate, fmt: &str) -> String {
        Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
            .format_localized(fmt, self.locale)
            .to_string()
    }
}

impl Default for LocaleLabels {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
        }
    }
}

impl LabelProvider for LocaleLabels {
    fn weekday(&self, date: NaiveDate) -> String {
        self.format(date, "%a")
    }

    fn month(&self, date: NaiveDate) -> String {
        self.format(date, "%B")
    }
}

#[derive(Debug, Clone, Default)]
pub struct Calendar {
    days: Vec<DateInfo>,
    index: HashMap<String, usize>,
}

impl Calendar {
    /// Every day from `start` to `end`, both inclusive.
    pub fn new(start: NaiveDate, end: NaiveDate, labels: &dyn LabelProvider) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let mut days = Vec::new();
        let mut d = start;
        while d <= end {
            days.push(day_info(d, labels));
            match d.succ_opt() {
                Some(next) => d = next,
                None => break,
            }
        }

        Ok(Self::indexed(days))
    }

    /// Calendar for a period expression (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`
    /// or a `start:end` range of those).
    pub fn from_period(period: &str, labels: &dyn LabelProvider) -> AppResult<Self> {
        let (start, end) = parse_period(period)?;
        Self::new(start, end, labels)
    }

    /// Adopt a day sequence produced elsewhere, after checking that it is
    /// strictly increasing and gap-free, with canonical ISO keys and
    /// matching day/weekend fields.
    pub fn from_days(days: Vec<DateInfo>) -> AppResult<Self> {
        let mut prev: Option<NaiveDate> = None;

        for info in &days {
            let date = parse_date(&info.full_date)
                .ok_or_else(|| AppError::InvalidDate(info.full_date.clone()))?;

            // full_date is the lookup key for records: only the padded ISO form matches them
            if date.format("%Y-%m-%d").to_string() != info.full_date {
                return Err(AppError::InvalidCalendar(format!(
                    "{} is not a canonical YYYY-MM-DD date",
                    info.full_date
                )));
            }
            if date.format("%d").to_string() != info.display_day {
                return Err(AppError::InvalidCalendar(format!(
                    "display day '{}' does not match {}",
                    info.display_day, info.full_date
                )));
            }

            if info.is_weekend != is_weekend(date) {
                return Err(AppError::InvalidCalendar(format!(
                    "weekend flag of {} does not match its weekday",
                    info.full_date
                )));
            }

            if let Some(p) = prev
                && p.succ_opt() != Some(date)
            {
                return Err(AppError::InvalidCalendar(format!(
                    "{} does not directly follow {}",
                    info.full_date, p
                )));
            }
            prev = Some(date);
        }

        Ok(Self::indexed(days))
    }

    fn indexed(days: Vec<DateInfo>) -> Self {
        let index = days
            .iter()
            .enumerate()
            .map(|(i, d)| (d.full_date.clone(), i))
            .collect();
        Self { days, index }
    }

    pub fn days(&self) -> &[DateInfo] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&DateInfo> {
        self.days.get(i)
    }

    /// Column index of an ISO date, if it belongs to the period.
    pub fn index_of(&self, full_date: &str) -> Option<usize> {
        self.index.get(full_date).copied()
    }

    pub fn contains(&self, full_date: &str) -> bool {
        self.index.contains_key(full_date)
    }

    /// Runs of consecutive days sharing a month label, in sequence order.
    /// The same label reappearing later starts a new group.
    pub fn month_groups(&self) -> Vec<MonthGroup> {
        let mut groups: Vec<MonthGroup> = Vec::new();

        for (i, day) in self.days.iter().enumerate() {
            match groups.last_mut() {
                Some(g) if g.month == day.month => g.indices.end = i + 1,
                _ => groups.push(MonthGroup {
                    month: day.month.clone(),
                    indices: i..i + 1,
                }),
            }
        }

        groups
    }
}

fn day_info(date: NaiveDate, labels: &dyn LabelProvider) -> DateInfo {
    DateInfo {
        full_date: date.format("%Y-%m-%d").to_string(),
        display_day: date.format("%d").to_string(),
        weekday: labels.weekday(date),
        month: labels.month(date),
        is_weekend: is_weekend(date),
    }
}
