//! Builders shared by the integration tests.
//!
//! Mirrors the record shape the upstream query layer delivers: one
//! detail per work period per day, 8:00 AM – 3:00 PM at a single
//! location unless a test says otherwise.

use chrono::NaiveDate;
use rota_core::{AccountingCodeAllocation, Assignment, Employee, VacancyDetail};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn march(day: u32) -> NaiveDate {
    date(2020, 3, day)
}

pub fn alloc(id: &str, fraction: f64) -> AccountingCodeAllocation {
    AccountingCodeAllocation {
        accounting_code_id: id.into(),
        accounting_code_name: format!("Accounts Payable {id}"),
        allocation: fraction,
    }
}

pub fn nawn_assignment(id: Option<&str>) -> Assignment {
    Assignment {
        id: id.map(Into::into),
        row_version: Some("34536346".into()),
        employee: Some(Employee {
            id: Some("7".into()),
            first_name: "David".into(),
            last_name: "Nawn".into(),
        }),
    }
}

pub fn detail(id: &str, day: NaiveDate) -> VacancyDetail {
    VacancyDetail {
        vacancy_id: Some("10".into()),
        vacancy_detail_id: id.into(),
        date: day,
        start_time_local: day.and_hms_opt(8, 0, 0).expect("valid time"),
        end_time_local: day.and_hms_opt(15, 0, 0).expect("valid time"),
        location_id: "1000".into(),
        location_name: "Haven Elementary School".into(),
        pay_code_id: Some("5".into()),
        pay_code_name: Some("Petty Cash".into()),
        accounting_code_allocations: Vec::new(),
        assignment: None,
    }
}

pub fn assigned(id: &str, day: NaiveDate, assignment_id: &str) -> VacancyDetail {
    let mut d = detail(id, day);
    d.assignment = Some(nawn_assignment(Some(assignment_id)));
    d
}
