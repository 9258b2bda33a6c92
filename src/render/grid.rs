//! Terminal rendering of the aggregated time matrix.
//!
//! Row layout: month header, day header, weekday header, then one block per
//! team. Project rows appear only under the expanded person, task rows only
//! under the expanded project. An active hover adds a tooltip block.

use crate::core::calendar::{Calendar, LabelProvider};
use crate::core::color::ColorScale;
use crate::core::disclosure::Disclosure;
use crate::models::{AggregatedPerson, AggregatedProject, Aggregation, DailyTotal};
use crate::utils::formatting::{center, pad_left, pad_right, truncate};
use ansi_term::{Colour, Style};

/// Shown in person cells with nothing logged.
pub const MISSING_MARK: &str = "!";
pub const WEEKEND_MARK: &str = "*";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub color: bool,
    pub label_width: usize,
    pub cell_width: usize,
    pub scale: ColorScale,
    pub hours_suffix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            label_width: 18,
            cell_width: 8,
            scale: ColorScale::default(),
            hours_suffix: crate::core::aggregate::DEFAULT_HOURS_SUFFIX.to_string(),
        }
    }
}

pub fn render(
    aggregation: &Aggregation,
    calendar: &Calendar,
    disclosure: &Disclosure,
    labels: &dyn LabelProvider,
    opts: &RenderOptions,
) -> String {
    let grid = Grid { calendar, opts };
    let mut out = String::new();

    grid.headers(&mut out);

    for team in &aggregation.teams {
        out.push('\n');
        out.push_str(&grid.style(Style::new().bold(), &team.name));
        out.push('\n');

        for person in &team.members {
            grid.person_row(&mut out, person, disclosure.is_person_expanded(&person.id));

            if disclosure.is_person_expanded(&person.id) {
                for project in &person.projects {
                    let open = disclosure.is_project_expanded(&project.project);
                    grid.project_rows(&mut out, project, open);
                }
            }
        }
    }

    if let Some(entry) = disclosure.hover_entry() {
        out.push('\n');
        out.push_str(&format!("┌ {} #{}\n", entry.date, entry.column_index + 1));
        for line in entry.tooltip(labels, &opts.hours_suffix).lines() {
            out.push_str("│ ");
            out.push_str(line);
            out.push('\n');
        }
    }

    out
}

struct Grid<'a> {
    calendar: &'a Calendar,
    opts: &'a RenderOptions,
}

impl Grid<'_> {
    fn style(&self, style: Style, text: &str) -> String {
        if self.opts.color {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn label(&self, text: &str, indent: usize) -> String {
        let width = self.opts.label_width.saturating_sub(indent);
        let cut = truncate(text, width);
        format!("{}{}|", " ".repeat(indent), pad_right(&cut, width))
    }

    fn headers(&self, out: &mut String) {
        let w = self.opts.cell_width;

        out.push_str(&self.label("", 0));
        for group in self.calendar.month_groups() {
            let width = group.len() * w;
            let text = center(&truncate(&group.month, width), width);
            out.push_str(&self.style(Style::new().bold(), &text));
        }
        out.push('\n');

        out.push_str(&self.label("", 0));
        for day in self.calendar.days() {
            let mark = if day.is_weekend { WEEKEND_MARK } else { "" };
            let text = center(&format!("{}{mark}", day.display_day), w);
            let style = if day.is_weekend {
                Style::new().dimmed()
            } else {
                Style::new()
            };
            out.push_str(&self.style(style, &text));
        }
        out.push('\n');

        out.push_str(&self.label("", 0));
        for day in self.calendar.days() {
            let text = center(&truncate(&day.weekday, w), w);
            out.push_str(&self.style(Style::new().dimmed(), &text));
        }
        out.push('\n');
    }

    fn person_row(&self, out: &mut String, person: &AggregatedPerson, expanded: bool) {
        let marker = if expanded { "▾ " } else { "▸ " };
        out.push_str(&self.label(&format!("{marker}{}", person.name), 0));
        for total in &person.daily_totals {
            out.push_str(&self.person_cell(total));
        }
        out.push('\n');
    }

    fn person_cell(&self, total: &DailyTotal) -> String {
        let w = self.opts.cell_width;
        if total.is_empty() {
            let text = center(MISSING_MARK, w);
            return self.style(Colour::Yellow.bold(), &text);
        }
        let text = truncate(&pad_left(&format!("{} ", total.display), w), w);
        let rgb = self.opts.scale.color_for(total.hours);
        self.style(
            Colour::Black.on(Colour::RGB(rgb.r, rgb.g, rgb.b)),
            &text,
        )
    }

    fn project_rows(&self, out: &mut String, project: &AggregatedProject, open: bool) {
        let marker = if open { "▾ " } else { "▸ " };
        out.push_str(&self.label(&format!("{marker}{}", project.project), 2));
        self.plain_cells(out, &project.daily_totals);

        if open {
            for task in &project.tasks {
                out.push_str(&self.label(&task.description, 6));
                self.plain_cells(out, &task.daily_totals);
            }
        }
    }

    fn plain_cells(&self, out: &mut String, totals: &[DailyTotal]) {
        let w = self.opts.cell_width;
        for total in totals {
            let text = pad_left(&format!("{} ", total.display), w);
            out.push_str(&truncate(&text, w));
        }
        out.push('\n');
    }
}
