//! Stage 2: merge adjacent buckets into assignment spans.
//!
//! A greedy single-lookback pass: each incoming bucket is compared
//! against the **last** accumulated group only. A bucket merges when it
//! carries the same assignment id and an identical shape list;
//! otherwise it seeds a new group. Non-adjacent buckets with identical
//! assignment and shape therefore stay separate — a gap breaks the
//! visual contiguity of a span even if the same substitute recurs.
//!
//! The merge compares assignment **ids**, not whole assignment objects:
//! a `row_version` bump does not make a different assignment for
//! display purposes.

use tracing::debug;

use crate::bucket::AssignmentDateBucket;
use crate::model::{AssignmentGroup, DetailShape, DisplayFlags};
use crate::shape::shapes_equal;

/// Run-length encode date-ordered buckets into [`AssignmentGroup`]s.
///
/// The accumulator lives entirely within this pass; callers only ever
/// see the finished list.
#[must_use]
pub fn merge_contiguous_buckets(
    buckets: Vec<AssignmentDateBucket<'_>>,
    flags: DisplayFlags,
) -> Vec<AssignmentGroup> {
    let bucket_count = buckets.len();
    let mut groups: Vec<AssignmentGroup> = Vec::new();

    for bucket in buckets {
        let shapes: Vec<DetailShape> = bucket
            .details
            .iter()
            .map(|d| DetailShape::from_detail(d, flags))
            .collect();

        if let Some(last) = groups.last_mut() {
            if last.assignment_id() == bucket.assignment_id
                && shapes_equal(&last.details, &shapes)
            {
                last.dates.push(bucket.date);
                last.vacancy_detail_ids
                    .extend(bucket.details.iter().map(|d| d.vacancy_detail_id.clone()));
                continue;
            }
        }

        groups.push(AssignmentGroup {
            // The full assignment object (employee, row version) comes
            // along for rendering even though only the id was keyed on.
            assignment: bucket.details.first().and_then(|d| d.assignment.clone()),
            dates: vec![bucket.date],
            vacancy_detail_ids: bucket
                .details
                .iter()
                .map(|d| d.vacancy_detail_id.clone())
                .collect(),
            details: shapes,
        });
    }

    debug!(buckets = bucket_count, groups = groups.len(), "merged contiguous buckets");
    groups
}
