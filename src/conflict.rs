//! Interval overlap and scheduling-conflict checks.

use chrono::NaiveDate;

use crate::model::WorkOrder;

/// Strict half-open overlap. Intervals that only touch at an endpoint do
/// not overlap.
pub fn ranges_overlap(
    start_a: NaiveDate,
    end_a: NaiveDate,
    start_b: NaiveDate,
    end_b: NaiveDate,
) -> bool {
    start_a < end_b && start_b < end_a
}

/// One occupied slot on a work center, the shape conflict checks consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledInterval {
    pub work_center_id: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl From<&WorkOrder> for ScheduledInterval {
    fn from(order: &WorkOrder) -> Self {
        Self {
            work_center_id: order.work_center_id.clone(),
            start: order.start,
            end: order.end,
        }
    }
}

/// Find the first order on the candidate's work center whose dates overlap
/// the candidate.
///
/// `exclude_id` skips one order so an edit does not conflict with itself.
/// "First" means first in `existing`'s own order; callers that need the
/// earliest blocker sort before calling. `end > start` on the candidate is
/// the form layer's contract, not checked here.
pub fn find_conflict<'a>(
    candidate: &ScheduledInterval,
    existing: &'a [WorkOrder],
    exclude_id: Option<&str>,
) -> Option<&'a WorkOrder> {
    existing.iter().find(|order| {
        order.work_center_id == candidate.work_center_id
            && exclude_id != Some(order.id.as_str())
            && ranges_overlap(candidate.start, candidate.end, order.start, order.end)
    })
}
