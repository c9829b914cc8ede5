#![forbid(unsafe_code)]
//! rota-core library.
//!
//! Collapses a flat list of per-day vacancy details into date-contiguous,
//! assignment-consistent display groups ("assignment spans"). The whole
//! pipeline is pure, synchronous, and in-memory: callers fetch the
//! details, we shape them for display.
//!
//! Two stages, run by [`group_vacancy_summary`]:
//!
//! 1. [`bucket`] — partition the date-sorted details into
//!    (assignment id, calendar date) buckets;
//! 2. [`merge`] — run-length encode adjacent buckets into
//!    [`AssignmentGroup`]s when assignment id and detail shapes match.
//!
//! # Conventions
//!
//! - **Errors**: the pipeline is total over well-formed input and
//!   returns no `Result`; malformed input is a caller bug, not a
//!   recoverable condition.
//! - **Logging**: `tracing` macros (`debug!`, `trace!`).

pub mod bucket;
pub mod merge;
pub mod model;
pub mod shape;

#[cfg(test)]
pub(crate) mod testutil;

pub use bucket::{AssignmentDateBucket, bucket_by_assignment_and_date};
pub use merge::merge_contiguous_buckets;
pub use model::{
    AccountingCodeAllocation, Assignment, AssignmentGroup, DetailShape, DisplayFlags, Employee,
    VacancyDetail,
};
pub use shape::shapes_equal;

use tracing::instrument;

/// Group vacancy details into assignment spans for display.
///
/// Sorts a view of `details` by `start_time_local` (stable, so ties keep
/// input order), buckets by (assignment id, date), then merges adjacent
/// buckets with matching assignment and shapes. The result partitions
/// the input: every `vacancy_detail_id` lands in exactly one group.
///
/// `flags` blank out hidden dimensions before comparison, so e.g. a
/// pay-code difference cannot split a span when pay codes are hidden.
#[must_use]
#[instrument(skip(details))]
pub fn group_vacancy_summary(
    details: &[VacancyDetail],
    flags: DisplayFlags,
) -> Vec<AssignmentGroup> {
    let mut ordered: Vec<&VacancyDetail> = details.iter().collect();
    ordered.sort_by_key(|d| d.start_time_local);

    let buckets = bucket_by_assignment_and_date(&ordered);
    merge_contiguous_buckets(buckets, flags)
}
