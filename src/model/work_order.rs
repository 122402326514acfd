use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkOrderStatus {
    Open,
    InProgress,
    Complete,
    Blocked,
}

impl WorkOrderStatus {
    pub const ALL: [WorkOrderStatus; 4] = [
        WorkOrderStatus::Open,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::Complete,
        WorkOrderStatus::Blocked,
    ];

    /// Display label for status pickers and exports.
    pub fn label(self) -> &'static str {
        match self {
            WorkOrderStatus::Open => "Open",
            WorkOrderStatus::InProgress => "In Progress",
            WorkOrderStatus::Complete => "Complete",
            WorkOrderStatus::Blocked => "Blocked",
        }
    }
}

/// A task scheduled on a work center for a date interval. The interval is
/// closed-open: `end` is the first day no longer occupied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: String,
    pub name: String,
    pub work_center_id: String,
    pub status: WorkOrderStatus,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WorkOrder {
    /// Create a work order with a fresh generated id.
    pub fn new(
        name: impl Into<String>,
        work_center_id: impl Into<String>,
        status: WorkOrderStatus,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        Self {
            id: format!("wo-{}", Uuid::new_v4()),
            name: name.into(),
            work_center_id: work_center_id.into(),
            status,
            start,
            end,
        }
    }

    /// Start of the first scheduled day, for timeline positioning.
    pub fn start_instant(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Start of the end day, for timeline positioning.
    pub fn end_instant(&self) -> NaiveDateTime {
        self.end.and_time(NaiveTime::MIN)
    }
}
