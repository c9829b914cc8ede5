//! Shared builders for unit tests.

use chrono::NaiveDate;

use crate::model::{Assignment, Employee, VacancyDetail};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// A detail at Haven Elementary with pay code 5 and no assignment.
pub fn detail_on(
    id: &str,
    day: NaiveDate,
    start_h: u32,
    start_m: u32,
    end_h: u32,
    end_m: u32,
) -> VacancyDetail {
    VacancyDetail {
        vacancy_id: Some("v1".into()),
        vacancy_detail_id: id.into(),
        date: day,
        start_time_local: day.and_hms_opt(start_h, start_m, 0).expect("valid time"),
        end_time_local: day.and_hms_opt(end_h, end_m, 0).expect("valid time"),
        location_id: "1000".into(),
        location_name: "Haven Elementary".into(),
        pay_code_id: Some("5".into()),
        pay_code_name: Some("Petty Cash".into()),
        accounting_code_allocations: Vec::new(),
        assignment: None,
    }
}

/// Attach a persisted (or prearranged, when `id` is `None`) assignment.
pub fn with_assignment(
    mut detail: VacancyDetail,
    id: Option<&str>,
    first: &str,
    last: &str,
) -> VacancyDetail {
    detail.assignment = Some(Assignment {
        id: id.map(Into::into),
        row_version: Some("34536346".into()),
        employee: Some(Employee {
            id: Some("7".into()),
            first_name: first.into(),
            last_name: last.into(),
        }),
    });
    detail
}
