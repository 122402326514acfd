//! Deterministic sample data: five work centers, eight named base orders
//! and five hundred generated ones, reproducible for a given seed date.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::conflict::ranges_overlap;
use crate::model::{Board, WorkCenter, WorkOrder, WorkOrderStatus};

const GREEK_LETTERS: [&str; 24] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
    "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Tau", "Upsilon", "Phi", "Chi",
    "Psi", "Omega",
];

const WORK_CENTER_IDS: [&str; 5] = ["wc-001", "wc-002", "wc-003", "wc-004", "wc-005"];

/// The five demo work centers.
pub fn sample_work_centers() -> Vec<WorkCenter> {
    vec![
        WorkCenter::new("wc-001", "Extrusion Line A"),
        WorkCenter::new("wc-002", "CNC Machine 1"),
        WorkCenter::new("wc-003", "Assembly Station"),
        WorkCenter::new("wc-004", "Quality Control"),
        WorkCenter::new("wc-005", "Packaging Line"),
    ]
}

/// Occupied slots per work center, each list kept sorted by start date.
struct SlotTracker {
    used: HashMap<String, Vec<(NaiveDate, NaiveDate)>>,
}

impl SlotTracker {
    fn new() -> Self {
        Self {
            used: HashMap::new(),
        }
    }

    fn is_free(&self, center: &str, start: NaiveDate, end: NaiveDate) -> bool {
        match self.used.get(center) {
            Some(slots) => !slots
                .iter()
                .any(|&(used_start, used_end)| ranges_overlap(start, end, used_start, used_end)),
            None => true,
        }
    }

    fn claim(&mut self, center: &str, start: NaiveDate, end: NaiveDate) {
        let slots = self.used.entry(center.to_string()).or_default();
        let at = slots.partition_point(|&(used_start, _)| used_start < start);
        slots.insert(at, (start, end));
    }
}

fn fixture(
    id: &str,
    name: &str,
    center: &str,
    status: WorkOrderStatus,
    start: NaiveDate,
    end: NaiveDate,
) -> WorkOrder {
    WorkOrder {
        id: id.to_string(),
        name: name.to_string(),
        work_center_id: center.to_string(),
        status,
        start,
        end,
    }
}

/// The eight hand-picked orders around the seed date. Zeta ends the day
/// Gamma starts on the same center; touching slots do not conflict.
fn base_orders(today: NaiveDate) -> Vec<WorkOrder> {
    let day = |offset: i64| today + Duration::days(offset);
    vec![
        fixture("wo-001", "Order Alpha", "wc-001", WorkOrderStatus::Complete, day(-14), day(-7)),
        fixture("wo-002", "Order Beta", "wc-002", WorkOrderStatus::InProgress, day(-3), day(4)),
        fixture("wo-003", "Order Gamma", "wc-003", WorkOrderStatus::Open, day(5), day(12)),
        fixture("wo-004", "Order Delta", "wc-004", WorkOrderStatus::Blocked, day(-5), day(2)),
        fixture("wo-005", "Order Epsilon", "wc-001", WorkOrderStatus::Open, day(1), day(8)),
        fixture("wo-006", "Order Zeta", "wc-003", WorkOrderStatus::InProgress, day(-2), day(5)),
        fixture("wo-007", "Order Eta", "wc-005", WorkOrderStatus::Complete, day(-10), day(-3)),
        fixture("wo-008", "Order Theta", "wc-002", WorkOrderStatus::Open, day(10), day(17)),
    ]
}

/// Base orders plus 500 generated ones (`wo-009` through `wo-508`), with no
/// two orders overlapping on the same work center.
///
/// Each generated order probes day offsets around a base position derived
/// from its index, inside a search window that starts at 60 days and widens
/// by 30 per failed pass, bounded at 500 attempts. A saturated center sends
/// the order far past the window instead, at `today + 180 + i*20` days.
pub fn sample_work_orders(today: NaiveDate) -> Vec<WorkOrder> {
    let statuses = WorkOrderStatus::ALL;

    let mut orders = base_orders(today);
    let mut tracker = SlotTracker::new();
    for order in &orders {
        tracker.claim(&order.work_center_id, order.start, order.end);
    }

    for i in 0..500i64 {
        let center = WORK_CENTER_IDS[(i % 5) as usize];
        let status = statuses[(i % 4) as usize];
        let base_offset = (i % 60) - 30;
        let duration = 3 + (i % 14);
        let letter = GREEK_LETTERS[((i / 4) % 24) as usize];
        let name = format!("Order {} {}", letter, i / 24 + 1);
        let id = format!("wo-{:03}", i + 9);

        let mut placed = None;
        let mut search_range = 60;
        let mut attempts = 0;
        while placed.is_none() && attempts < 500 {
            for offset in 0..search_range {
                let days_offset = base_offset + offset - search_range / 2;
                let start = today + Duration::days(days_offset);
                let end = start + Duration::days(duration);
                let free = tracker.is_free(center, start, end);
                attempts += 1;
                if free {
                    placed = Some((start, end));
                    break;
                }
            }
            if placed.is_none() {
                search_range += 30;
            }
        }

        let (start, end) = placed.unwrap_or_else(|| {
            let start = today + Duration::days(180 + i * 20);
            (start, start + Duration::days(duration))
        });

        tracker.claim(center, start, end);
        orders.push(fixture(&id, &name, center, status, start, end));
    }

    orders
}

/// A board pre-loaded with the sample centers and orders.
pub fn sample_board(today: NaiveDate) -> Board {
    let mut board = Board::new("Sample Board");
    board.work_centers = sample_work_centers();
    board.work_orders = sample_work_orders(today);
    board
}
