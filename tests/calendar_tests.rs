use chrono::{Datelike, NaiveDate};
use rtimegrid::AppError;
use rtimegrid::core::aggregate::aggregate;
use rtimegrid::core::calendar::{Calendar, LabelProvider, LocaleLabels};
use rtimegrid::models::{Person, TaskRecord, Team};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Labels the first half of each month "A" and the second half "B".
struct HalfMonthLabels;

impl LabelProvider for HalfMonthLabels {
    fn weekday(&self, _date: NaiveDate) -> String {
        String::new()
    }

    fn month(&self, date: NaiveDate) -> String {
        let half = if date.day() <= 15 { "A" } else { "B" };
        half.to_string()
    }
}

#[test]
fn test_calendar_days_are_contiguous_and_labelled() {
    let cal = Calendar::new(ymd(2024, 1, 1), ymd(2024, 1, 7), &LocaleLabels::default()).unwrap();

    assert_eq!(cal.len(), 7);
    let first = &cal.days()[0];
    assert_eq!(first.full_date, "2024-01-01");
    assert_eq!(first.display_day, "01");
    assert_eq!(first.weekday, "Mon");
    assert_eq!(first.month, "January");
    assert!(!first.is_weekend);

    assert!(cal.days()[5].is_weekend); // Saturday
    assert!(cal.days()[6].is_weekend); // Sunday
    assert_eq!(cal.days()[6].full_date, "2024-01-07");
}

#[test]
fn test_single_day_range() {
    let cal = Calendar::new(ymd(2024, 2, 29), ymd(2024, 2, 29), &LocaleLabels::default()).unwrap();
    assert_eq!(cal.len(), 1);
    assert_eq!(cal.index_of("2024-02-29"), Some(0));
}

#[test]
fn test_end_before_start_is_invalid_range() {
    let err = Calendar::new(ymd(2024, 1, 2), ymd(2024, 1, 1), &LocaleLabels::default()).unwrap_err();
    match err {
        AppError::InvalidRange { start, end } => {
            assert_eq!(start, "2024-01-02");
            assert_eq!(end, "2024-01-01");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_from_period_formats() {
    let labels = LocaleLabels::default();

    assert_eq!(Calendar::from_period("2024", &labels).unwrap().len(), 366);
    assert_eq!(Calendar::from_period("2023-02", &labels).unwrap().len(), 28);
    assert_eq!(Calendar::from_period("2024-02", &labels).unwrap().len(), 29);
    assert_eq!(Calendar::from_period("2024-06-18", &labels).unwrap().len(), 1);
    assert_eq!(Calendar::from_period("2024-01:2024-03", &labels).unwrap().len(), 91);
    assert_eq!(
        Calendar::from_period("2024-01-30:2024-02-02", &labels).unwrap().len(),
        4
    );
}

#[test]
fn test_from_period_errors() {
    let labels = LocaleLabels::default();

    assert!(matches!(
        Calendar::from_period("2024-13", &labels),
        Err(AppError::InvalidPeriod(_))
    ));
    assert!(matches!(
        Calendar::from_period("yesterday", &labels),
        Err(AppError::InvalidPeriod(_))
    ));
    assert!(matches!(
        Calendar::from_period("2024-01:2024-02-01", &labels),
        Err(AppError::InvalidPeriod(_))
    ));
    assert!(matches!(
        Calendar::from_period("2024-03:2024-01", &labels),
        Err(AppError::InvalidRange { .. })
    ));
}

#[test]
fn test_month_groups_across_boundary() {
    let cal = Calendar::new(ymd(2024, 1, 30), ymd(2024, 2, 2), &LocaleLabels::default()).unwrap();
    let groups = cal.month_groups();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].month, "January");
    assert_eq!(groups[0].indices, 0..2);
    assert_eq!(groups[1].month, "February");
    assert_eq!(groups[1].indices, 2..4);
}

#[test]
fn test_month_groups_are_contiguous_runs() {
    let cal = Calendar::new(ymd(2024, 1, 14), ymd(2024, 2, 2), &HalfMonthLabels).unwrap();
    let groups = cal.month_groups();

    let summary: Vec<(&str, std::ops::Range<usize>)> = groups
        .iter()
        .map(|g| (g.month.as_str(), g.indices.clone()))
        .collect();
    assert_eq!(summary, vec![("A", 0..2), ("B", 2..18), ("A", 18..20)]);
}

#[test]
fn test_index_of_and_contains() {
    let cal = Calendar::from_period("2024-01", &LocaleLabels::default()).unwrap();
    assert_eq!(cal.index_of("2024-01-01"), Some(0));
    assert_eq!(cal.index_of("2024-01-31"), Some(30));
    assert_eq!(cal.index_of("2024-02-01"), None);
    assert!(!cal.contains("2023-12-31"));
}

#[test]
fn test_from_days_accepts_valid_sequence() {
    let built = Calendar::from_period("2024-03", &LocaleLabels::default()).unwrap();
    let adopted = Calendar::from_days(built.days().to_vec()).unwrap();
    assert_eq!(adopted.days(), built.days());
    assert_eq!(adopted.index_of("2024-03-15"), Some(14));

    assert!(Calendar::from_days(Vec::new()).unwrap().is_empty());
}

#[test]
fn test_from_days_rejects_gaps_and_bad_flags() {
    let built = Calendar::from_period("2024-03", &LocaleLabels::default()).unwrap();

    let mut gap = built.days().to_vec();
    gap.remove(3);
    assert!(matches!(Calendar::from_days(gap), Err(AppError::InvalidCalendar(_))));

    let mut reversed = built.days()[..3].to_vec();
    reversed.reverse();
    assert!(matches!(Calendar::from_days(reversed), Err(AppError::InvalidCalendar(_))));

    let mut flag = built.days().to_vec();
    flag[0].is_weekend = !flag[0].is_weekend;
    assert!(matches!(Calendar::from_days(flag), Err(AppError::InvalidCalendar(_))));

    let mut garbage = built.days().to_vec();
    garbage[0].full_date = "03/01/2024".to_string();
    assert!(matches!(Calendar::from_days(garbage), Err(AppError::InvalidDate(_))));

    // same day, but unpadded: records keyed "2024-03-01" would never match it
    let mut unpadded = built.days().to_vec();
    unpadded[0].full_date = "2024-3-1".to_string();
    assert!(matches!(Calendar::from_days(unpadded), Err(AppError::InvalidCalendar(_))));

    let mut day_label = built.days().to_vec();
    day_label[0].display_day = "1".to_string();
    assert!(matches!(Calendar::from_days(day_label), Err(AppError::InvalidCalendar(_))));
}

#[test]
fn test_from_days_keys_match_record_dates() {
    let built = Calendar::from_period("2024-01-01:2024-01-03", &LocaleLabels::default()).unwrap();
    let cal = Calendar::from_days(built.days().to_vec()).unwrap();

    let teams = vec![Team {
        name: "Team Alpha".to_string(),
        members: vec![Person {
            id: "alpha-1".to_string(),
            name: "Anna".to_string(),
            team: "Team Alpha".to_string(),
            records: vec![TaskRecord {
                id: "r1".to_string(),
                project: "Apollo".to_string(),
                description: "Planning".to_string(),
                date: "2024-01-01".to_string(),
                time: 3.0,
            }],
        }],
    }];

    let agg = aggregate(&teams, &cal);
    assert!(agg.diagnostics.is_clean());
    assert_eq!(agg.teams[0].members[0].daily_totals[0].display, "3.00");
}

#[test]
fn test_locale_labels() {
    assert!(matches!(LocaleLabels::new("xx_YY"), Err(AppError::UnknownLocale(_))));

    let en = LocaleLabels::new("en_US").unwrap();
    let ru = LocaleLabels::new("ru_RU").unwrap();
    let d = ymd(2024, 1, 1);
    assert_eq!(en.month(d), "January");
    assert!(!ru.month(d).is_empty());
    assert_ne!(ru.month(d), en.month(d));
}
