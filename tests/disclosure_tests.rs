mod common;
use common::sample_teams;
use rtimegrid::core::aggregate::aggregate;
use rtimegrid::core::calendar::{Calendar, LocaleLabels};
use rtimegrid::core::disclosure::{Disclosure, DisclosureEvent, Expansion, HoverEntry};

fn entry(person: &str, column_index: usize) -> HoverEntry {
    HoverEntry {
        team_name: "Team Alpha".to_string(),
        person_name: person.to_string(),
        date: "2024-01-01".to_string(),
        time: "5.00".to_string(),
        column_index,
    }
}

#[test]
fn test_initial_state_is_collapsed() {
    let d = Disclosure::new();
    assert_eq!(d.expansion(), &Expansion::Collapsed);
    assert_eq!(d.expanded_person(), None);
    assert_eq!(d.expanded_project(), None);
    assert!(d.hover_entry().is_none());
    assert!(!d.has_pending());
}

#[test]
fn test_switching_person_collapses_project() {
    let mut d = Disclosure::new();
    d.toggle_person("A");
    d.toggle_project("P1");
    assert_eq!(d.expanded_project(), Some("P1"));

    d.toggle_person("B");
    assert_eq!(
        d.expansion(),
        &Expansion::Person {
            id: "B".to_string(),
            project: None
        }
    );
}

#[test]
fn test_toggle_same_person_collapses() {
    let mut d = Disclosure::new();
    d.toggle_person("A");
    d.toggle_project("P1");
    d.toggle_person("A");
    assert_eq!(d.expansion(), &Expansion::Collapsed);

    // re-expanding starts without a project
    d.toggle_person("A");
    assert_eq!(d.expanded_person(), Some("A"));
    assert_eq!(d.expanded_project(), None);
}

#[test]
fn test_toggle_project_requires_person() {
    let mut d = Disclosure::new();
    d.toggle_project("P1");
    assert_eq!(d.expansion(), &Expansion::Collapsed);
    assert!(!d.is_project_expanded("P1"));
}

#[test]
fn test_toggle_project_switches_and_clears() {
    let mut d = Disclosure::new();
    d.toggle_person("A");

    d.toggle_project("P1");
    d.toggle_project("P2");
    assert!(d.is_project_expanded("P2"));
    assert!(!d.is_project_expanded("P1"));
    assert!(d.is_person_expanded("A"));

    d.toggle_project("P2");
    assert_eq!(d.expanded_project(), None);
    assert_eq!(d.expanded_person(), Some("A"));
}

#[test]
fn test_unknown_ids_are_accepted() {
    let mut d = Disclosure::new();
    d.toggle_person("does-not-exist");
    d.toggle_project("nor-this");
    assert_eq!(d.expanded_person(), Some("does-not-exist"));
    assert_eq!(d.expanded_project(), Some("nor-this"));
}

#[test]
fn test_hover_is_independent_of_expansion() {
    let mut d = Disclosure::new();
    d.hover(entry("Anna", 0));
    d.toggle_person("A");
    d.toggle_project("P");
    d.toggle_person("A");
    assert_eq!(d.hover_entry(), Some(&entry("Anna", 0)));

    d.hover(entry("Bruno", 3));
    assert_eq!(d.hover_entry().map(|h| h.column_index), Some(3));

    d.unhover();
    assert!(d.hover_entry().is_none());
    assert_eq!(d.expansion(), &Expansion::Collapsed);
}

#[test]
fn test_scheduled_hover_keeps_only_newest() {
    let mut d = Disclosure::new();
    d.schedule_hover(entry("Anna", 0));
    d.schedule_hover(entry("Anna", 1));
    d.schedule_hover(entry("Anna", 2));
    assert!(d.has_pending());
    assert!(d.hover_entry().is_none());

    assert!(d.tick());
    assert_eq!(d.hover_entry().map(|h| h.column_index), Some(2));
    assert!(!d.has_pending());

    // nothing pending: no change
    assert!(!d.tick());

    // same entry again: applied, but nothing visible changes
    d.schedule_hover(entry("Anna", 2));
    assert!(!d.tick());
}

#[test]
fn test_scheduled_unhover_cancels_pending_hover() {
    let mut d = Disclosure::new();
    d.hover(entry("Anna", 0));
    d.schedule_hover(entry("Anna", 1));
    d.schedule_unhover();

    assert!(d.tick());
    assert!(d.hover_entry().is_none());
}

#[test]
fn test_immediate_hover_discards_pending_update() {
    let mut d = Disclosure::new();
    d.schedule_hover(entry("Anna", 1));
    d.hover(entry("Bruno", 5));
    assert!(!d.has_pending());

    assert!(!d.tick());
    assert_eq!(d.hover_entry().map(|h| h.person_name.as_str()), Some("Bruno"));
}

#[test]
fn test_apply_events_in_order() {
    let mut d = Disclosure::new();
    let events = vec![
        DisclosureEvent::TogglePerson("A".to_string()),
        DisclosureEvent::ToggleProject("P1".to_string()),
        DisclosureEvent::Hover(entry("Anna", 4)),
        DisclosureEvent::TogglePerson("B".to_string()),
        DisclosureEvent::Unhover,
    ];
    for e in events {
        d.apply(e);
    }
    assert_eq!(d.expanded_person(), Some("B"));
    assert_eq!(d.expanded_project(), None);
    assert!(d.hover_entry().is_none());
}

#[test]
fn test_order_of_toggles_matters() {
    let mut a = Disclosure::new();
    a.toggle_person("A");
    a.toggle_project("P");

    let mut b = Disclosure::new();
    b.toggle_project("P");
    b.toggle_person("A");

    assert_eq!(a.expanded_project(), Some("P"));
    assert_eq!(b.expanded_project(), None);
}

#[test]
fn test_hover_entry_for_person_cell() {
    let labels = LocaleLabels::default();
    let cal = Calendar::from_period("2024-01", &labels).unwrap();
    let agg = aggregate(&sample_teams(), &cal);

    let e = HoverEntry::for_person_cell(&agg, &cal, "alpha-1", "2024-01-02").unwrap();
    assert_eq!(e.team_name, "Team Alpha");
    assert_eq!(e.person_name, "Anna");
    assert_eq!(e.time, "5.75");
    assert_eq!(e.column_index, 1);

    assert!(HoverEntry::for_person_cell(&agg, &cal, "alpha-1", "2024-02-01").is_none());
    assert!(HoverEntry::for_person_cell(&agg, &cal, "ghost", "2024-01-02").is_none());

    assert_eq!(
        e.tooltip(&labels, "h"),
        "Team Alpha\nAnna\n2 January 2024\n5.75 h"
    );

    let empty = HoverEntry::for_person_cell(&agg, &cal, "alpha-2", "2024-01-02").unwrap();
    assert_eq!(empty.time, "");
    assert!(empty.tooltip(&labels, "h").ends_with("0.00 h"));
}
