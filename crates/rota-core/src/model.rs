//! Domain model for vacancy summaries.
//!
//! Field naming on the wire is camelCase (`vacancyDetailId`,
//! `accountingCodeAllocations`, ...) to match what the upstream query
//! layer produces, so fixture files and CLI input deserialize without a
//! translation step.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The person filling (or slated to fill) a vacancy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
}

impl Employee {
    /// Display name, first-name first.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A substitute assignment attached to one or more vacancy details.
///
/// Three states matter to grouping:
/// - absent entirely: the detail is **unfilled**;
/// - present with `id: None` but an employee: **prearranged** — the
///   assignment has been chosen but not yet persisted;
/// - present with an `id`: a persisted assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<Employee>,
}

impl Assignment {
    /// True when the assignment exists only client-side (no persisted id).
    #[must_use]
    pub fn is_prearranged(&self) -> bool {
        self.id.is_none() && self.employee.is_some()
    }
}

/// One accounting-code share of a work period's cost.
///
/// The upstream source does not guarantee list order, so allocation
/// lists are set-like: equality is evaluated after sorting by code id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountingCodeAllocation {
    pub accounting_code_id: String,
    pub accounting_code_name: String,
    /// Fraction of the period charged to this code (0.0–1.0).
    pub allocation: f64,
}

/// One work-period instance of a vacancy: a single location/time span on
/// a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancyDetail {
    /// Absent for vacancies that have not been created yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vacancy_id: Option<String>,
    pub vacancy_detail_id: String,
    /// Calendar day, time-of-day stripped.
    pub date: NaiveDate,
    pub start_time_local: NaiveDateTime,
    pub end_time_local: NaiveDateTime,
    pub location_id: String,
    pub location_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_code_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_code_name: Option<String>,
    #[serde(default)]
    pub accounting_code_allocations: Vec<AccountingCodeAllocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment: Option<Assignment>,
}

impl VacancyDetail {
    /// The assignment id this detail groups under.
    ///
    /// `None` covers both unfilled details and prearranged assignments
    /// (which have an employee but no persisted id yet) — the two are
    /// indistinguishable at the grouping key. See `bucket` module docs.
    #[must_use]
    pub fn assignment_id(&self) -> Option<&str> {
        self.assignment.as_ref().and_then(|a| a.id.as_deref())
    }
}

/// The comparable/display form of one work period: times formatted for
/// rendering, ids carried for equality, names carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailShape {
    /// 12-hour clock, e.g. `"8:00 AM"`.
    pub start_time: String,
    pub end_time: String,
    pub location_id: String,
    pub location_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_code_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_code_name: Option<String>,
    #[serde(default)]
    pub accounting_code_allocations: Vec<AccountingCodeAllocation>,
}

/// A maximal run of consecutive date-buckets sharing one assignment
/// identity and one detail-shape list — one display span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment: Option<Assignment>,
    /// Strictly increasing; one entry per merged day.
    pub dates: Vec<NaiveDate>,
    /// Every detail id covered by this span, in scan order.
    pub vacancy_detail_ids: Vec<String>,
    /// The per-period shape list, constant across all merged dates.
    pub details: Vec<DetailShape>,
}

impl AssignmentGroup {
    /// True when no substitute is attached at all.
    #[must_use]
    pub fn is_unfilled(&self) -> bool {
        self.assignment.is_none()
    }

    /// The persisted assignment id, if any.
    #[must_use]
    pub fn assignment_id(&self) -> Option<&str> {
        self.assignment.as_ref().and_then(|a| a.id.as_deref())
    }
}

/// Display toggles that feed into shape comparison: a hidden dimension
/// is blanked out of the shape, so differences in it can no longer
/// split a span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayFlags {
    pub hide_accounting_codes: bool,
    pub hide_pay_codes: bool,
}
