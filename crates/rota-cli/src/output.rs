//! Human/JSON rendering of assignment spans.
//!
//! Human output is the textual analogue of the summary banner the web
//! UI renders from the same groups: one block per span with the
//! substitute line, the covered dates, and a row per work period. JSON
//! output is the serialized group list, stable for scripting.

use std::io::{self, Write};

use chrono::NaiveDate;
use clap::ValueEnum;
use rota_core::{AssignmentGroup, DetailShape};

/// Shared width for human output separators.
const RULE_WIDTH: usize = 60;

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-optimized span blocks.
    Human,
    /// Machine-readable JSON (the full group list).
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Render the group list to stdout in the requested mode.
pub fn render_groups(groups: &[AssignmentGroup], mode: OutputMode) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut w = stdout.lock();

    if mode.is_json() {
        serde_json::to_writer_pretty(&mut w, groups)?;
        writeln!(w)?;
        return Ok(());
    }

    for group in groups {
        write_group(&mut w, group)?;
    }
    writeln!(w, "{:-<width$}", "", width = RULE_WIDTH)?;
    writeln!(w, "{} span(s)", groups.len())?;
    Ok(())
}

fn write_group(w: &mut dyn Write, group: &AssignmentGroup) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = RULE_WIDTH)?;
    writeln!(w, "{}", banner(group))?;
    writeln!(w, "{}", date_line(&group.dates))?;
    for shape in &group.details {
        writeln!(w, "  {}", period_row(shape))?;
    }
    Ok(())
}

/// The substitute line: who covers the span, and in which fill state.
fn banner(group: &AssignmentGroup) -> String {
    match &group.assignment {
        None => "Unfilled".to_string(),
        Some(assignment) => {
            let name = assignment
                .employee
                .as_ref()
                .map_or_else(|| "(unknown)".to_string(), |e| e.full_name());
            match &assignment.id {
                Some(id) => format!("Assigned: {name} (#{id})"),
                None => format!("Prearranged: {name}"),
            }
        }
    }
}

/// Covered dates, e.g. `Mar 17, 2020 - Mar 19, 2020` or a single date.
fn date_line(dates: &[NaiveDate]) -> String {
    let fmt = |d: &NaiveDate| d.format("%b %-d, %Y").to_string();
    match (dates.first(), dates.last()) {
        (Some(first), Some(last)) if first != last => {
            format!("{} - {} ({} days)", fmt(first), fmt(last), dates.len())
        }
        (Some(first), _) => fmt(first),
        (None, _) => String::new(),
    }
}

/// One work-period row: times, location, pay code, accounting codes.
fn period_row(shape: &DetailShape) -> String {
    let pay = shape.pay_code_name.as_deref().unwrap_or("-");
    let codes = if shape.accounting_code_allocations.is_empty() {
        "-".to_string()
    } else {
        shape
            .accounting_code_allocations
            .iter()
            .map(|a| a.accounting_code_name.clone())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "{} - {}  {}  pay: {pay}  codes: {codes}",
        shape.start_time, shape.end_time, shape.location_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_core::{Assignment, Employee};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 3, d).expect("valid date")
    }

    #[test]
    fn banner_covers_the_three_fill_states() {
        let unfilled = AssignmentGroup {
            assignment: None,
            dates: vec![day(17)],
            vacancy_detail_ids: vec!["1".into()],
            details: Vec::new(),
        };
        assert_eq!(banner(&unfilled), "Unfilled");

        let employee = Employee {
            id: Some("7".into()),
            first_name: "David".into(),
            last_name: "Nawn".into(),
        };
        let assigned = AssignmentGroup {
            assignment: Some(Assignment {
                id: Some("3".into()),
                row_version: None,
                employee: Some(employee.clone()),
            }),
            ..unfilled.clone()
        };
        assert_eq!(banner(&assigned), "Assigned: David Nawn (#3)");

        let prearranged = AssignmentGroup {
            assignment: Some(Assignment {
                id: None,
                row_version: None,
                employee: Some(employee),
            }),
            ..unfilled
        };
        assert_eq!(banner(&prearranged), "Prearranged: David Nawn");
    }

    #[test]
    fn date_line_collapses_ranges() {
        assert_eq!(date_line(&[day(17)]), "Mar 17, 2020");
        assert_eq!(
            date_line(&[day(17), day(18), day(19)]),
            "Mar 17, 2020 - Mar 19, 2020 (3 days)"
        );
        assert_eq!(date_line(&[]), "");
    }
}
