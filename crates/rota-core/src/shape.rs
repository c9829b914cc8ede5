//! Detail-shape conversion and equality.
//!
//! A [`DetailShape`] is the comparable/display form of one work period.
//! Two shape lists decide whether adjacent date-buckets merge into one
//! assignment span, so equality here *is* the merge semantics:
//!
//! - top-level comparison is **positional** — detail order is
//!   deterministic (sorted by `start_time_local` upstream), so an
//!   index-by-index walk is sufficient and cheaper than multiset
//!   comparison;
//! - accounting-code allocations inside a single shape are **set-like**
//!   — the upstream source does not guarantee their order, so both
//!   sides are sorted by numeric code id before comparing.
//!
//! The two regimes are kept in separate predicates
//! ([`scalar_fields_equal`] is strict, [`allocations_equal`] sorts
//! first) and composed explicitly in [`shapes_equal`].

use std::cmp::Ordering;

use crate::model::{AccountingCodeAllocation, DetailShape, DisplayFlags, VacancyDetail};

/// 12-hour clock with no hour padding: `8:00 AM`, `12:30 PM`.
const TIME_FORMAT: &str = "%-I:%M %p";

impl DetailShape {
    /// Convert a raw detail into its comparable/display shape.
    ///
    /// Display flags blank out the hidden dimension entirely (pay codes
    /// to `None`, accounting codes to an empty list), so a hidden
    /// difference can neither split a span nor leak into rendering.
    #[must_use]
    pub fn from_detail(detail: &VacancyDetail, flags: DisplayFlags) -> Self {
        Self {
            start_time: detail.start_time_local.format(TIME_FORMAT).to_string(),
            end_time: detail.end_time_local.format(TIME_FORMAT).to_string(),
            location_id: detail.location_id.clone(),
            location_name: detail.location_name.clone(),
            pay_code_id: if flags.hide_pay_codes {
                None
            } else {
                detail.pay_code_id.clone()
            },
            pay_code_name: if flags.hide_pay_codes {
                None
            } else {
                detail.pay_code_name.clone()
            },
            accounting_code_allocations: if flags.hide_accounting_codes {
                Vec::new()
            } else {
                detail.accounting_code_allocations.clone()
            },
        }
    }
}

/// Positional equality of two shape lists.
#[must_use]
pub fn shapes_equal(a: &[DetailShape], b: &[DetailShape]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(x, y)| {
            scalar_fields_equal(x, y)
                && allocations_equal(
                    &x.accounting_code_allocations,
                    &y.accounting_code_allocations,
                )
        })
}

/// Strict equality on the scalar dimensions of one shape.
///
/// Names (`location_name`, `pay_code_name`) are display-only and do not
/// participate: the id decides identity.
fn scalar_fields_equal(a: &DetailShape, b: &DetailShape) -> bool {
    a.start_time == b.start_time
        && a.end_time == b.end_time
        && a.location_id == b.location_id
        && a.pay_code_id == b.pay_code_id
}

/// Set equality of two allocation lists: sort by numeric code id, then
/// compare element-wise on id and fraction.
//
// Fractions come from a single upstream source and are never recomputed
// here, so exact comparison is correct.
#[allow(clippy::float_cmp)]
fn allocations_equal(a: &[AccountingCodeAllocation], b: &[AccountingCodeAllocation]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let sa = sorted_by_code(a);
    let sb = sorted_by_code(b);
    sa.iter().zip(&sb).all(|(x, y)| {
        x.accounting_code_id == y.accounting_code_id && x.allocation == y.allocation
    })
}

/// Canonical order for allocation lists.
fn sorted_by_code(list: &[AccountingCodeAllocation]) -> Vec<&AccountingCodeAllocation> {
    let mut sorted: Vec<&AccountingCodeAllocation> = list.iter().collect();
    sorted.sort_by(|x, y| numeric_code_order(&x.accounting_code_id, &y.accounting_code_id));
    sorted
}

/// Code ids are numeric strings; compare numerically, falling back to
/// lexicographic order for non-numeric ids.
fn numeric_code_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}
