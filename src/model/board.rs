use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::conflict::{find_conflict, ScheduledInterval};

use super::work_center::WorkCenter;
use super::work_order::WorkOrder;

/// Why a board mutation was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("work order '{0}' not found")]
    OrderNotFound(String),
    #[error("schedule conflict with '{name}' ({id}) on work center {work_center_id}")]
    Conflict {
        id: String,
        name: String,
        work_center_id: String,
    },
}

/// The scheduling board: work centers and the orders placed on them.
///
/// Fields are public host state; the checked mutators below are the save
/// path that keeps each work center overlap-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    pub work_centers: Vec<WorkCenter>,
    pub work_orders: Vec<WorkOrder>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            name: "Untitled Board".to_string(),
            work_centers: Vec::new(),
            work_orders: Vec::new(),
            created: Utc::now(),
            modified: Utc::now(),
        }
    }
}

impl Board {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Touch the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }

    pub fn work_center(&self, id: &str) -> Option<&WorkCenter> {
        self.work_centers.iter().find(|center| center.id == id)
    }

    pub fn work_order(&self, id: &str) -> Option<&WorkOrder> {
        self.work_orders.iter().find(|order| order.id == id)
    }

    /// Orders on one work center, in insertion order.
    pub fn work_orders_for_center(&self, work_center_id: &str) -> Vec<&WorkOrder> {
        self.work_orders
            .iter()
            .filter(|order| order.work_center_id == work_center_id)
            .collect()
    }

    pub fn add_work_center(&mut self, center: WorkCenter) {
        self.work_centers.push(center);
        self.touch();
    }

    /// True when the slot collides with an order on the center. `exclude_id`
    /// leaves one order out of the check, for edits.
    pub fn has_overlap(
        &self,
        work_center_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        exclude_id: Option<&str>,
    ) -> bool {
        let candidate = ScheduledInterval {
            work_center_id: work_center_id.to_string(),
            start,
            end,
        };
        find_conflict(&candidate, &self.work_orders, exclude_id).is_some()
    }

    /// Place a new order, refusing it when its slot is already taken.
    pub fn add_work_order(&mut self, order: WorkOrder) -> Result<(), BoardError> {
        let candidate = ScheduledInterval::from(&order);
        if let Some(blocking) = find_conflict(&candidate, &self.work_orders, None) {
            return Err(conflict_error(blocking));
        }
        self.work_orders.push(order);
        self.touch();
        Ok(())
    }

    /// Replace an existing order, refusing the change when its new dates
    /// collide with another order.
    pub fn update_work_order(&mut self, order: WorkOrder) -> Result<(), BoardError> {
        let index = self
            .work_orders
            .iter()
            .position(|existing| existing.id == order.id)
            .ok_or_else(|| BoardError::OrderNotFound(order.id.clone()))?;
        let candidate = ScheduledInterval::from(&order);
        if let Some(blocking) =
            find_conflict(&candidate, &self.work_orders, Some(order.id.as_str()))
        {
            return Err(conflict_error(blocking));
        }
        self.work_orders[index] = order;
        self.touch();
        Ok(())
    }

    /// Remove an order. Removing an unknown id is a no-op.
    pub fn delete_work_order(&mut self, id: &str) {
        let before = self.work_orders.len();
        self.work_orders.retain(|order| order.id != id);
        if self.work_orders.len() != before {
            self.touch();
        }
    }
}

fn conflict_error(blocking: &WorkOrder) -> BoardError {
    BoardError::Conflict {
        id: blocking.id.clone(),
        name: blocking.name.clone(),
        work_center_id: blocking.work_center_id.clone(),
    }
}
