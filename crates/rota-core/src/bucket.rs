//! Stage 1: partition details into (assignment id, calendar date) buckets.
//!
//! # Key choice
//!
//! The bucket key is the *persisted* assignment id only — not the
//! employee, not the row version. Unfilled details carry no assignment
//! identity at all, so `None` is their shared key. A prearranged
//! assignment (employee chosen, no id persisted yet) also keys as
//! `None`: at this stage it is indistinguishable from unfilled by id
//! alone. Upstream always materializes an id before two prearrangements
//! can coexist on one date, so the employee id deliberately does not
//! participate in the key.

use chrono::NaiveDate;
use tracing::trace;

use crate::model::VacancyDetail;

/// All details sharing one assignment id on one calendar day.
///
/// Buckets appear in the order their key is first encountered while
/// scanning the date-sorted input; they are never re-sorted.
#[derive(Debug)]
pub struct AssignmentDateBucket<'a> {
    pub assignment_id: Option<&'a str>,
    pub date: NaiveDate,
    /// Non-empty; preserves scan order within the bucket.
    pub details: Vec<&'a VacancyDetail>,
}

/// Partition `details` into per-(assignment, date) buckets.
///
/// Precondition: `details` is sorted ascending by `start_time_local`
/// (the pipeline entry point performs this sort). Linear scan with a
/// linear bucket lookup — inputs are tens of records, not thousands.
#[must_use]
pub fn bucket_by_assignment_and_date<'a>(
    details: &[&'a VacancyDetail],
) -> Vec<AssignmentDateBucket<'a>> {
    let mut buckets: Vec<AssignmentDateBucket<'a>> = Vec::new();

    for &detail in details {
        let key = detail.assignment_id();
        let existing = buckets
            .iter()
            .position(|b| b.assignment_id == key && b.date == detail.date);

        if let Some(i) = existing {
            buckets[i].details.push(detail);
        } else {
            trace!(?key, date = %detail.date, "new assignment/date bucket");
            buckets.push(AssignmentDateBucket {
                assignment_id: key,
                date: detail.date,
                details: vec![detail],
            });
        }
    }

    buckets
}
