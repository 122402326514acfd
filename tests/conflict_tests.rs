use chrono::NaiveDate;
use work_order_timeline::conflict::{find_conflict, ranges_overlap, ScheduledInterval};
use work_order_timeline::model::{WorkOrder, WorkOrderStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn order(id: &str, center: &str, start_day: u32, end_day: u32) -> WorkOrder {
    WorkOrder {
        id: id.to_string(),
        name: format!("Order {id}"),
        work_center_id: center.to_string(),
        status: WorkOrderStatus::Open,
        start: date(2025, 1, start_day),
        end: date(2025, 1, end_day),
    }
}

fn interval(center: &str, start_day: u32, end_day: u32) -> ScheduledInterval {
    ScheduledInterval {
        work_center_id: center.to_string(),
        start: date(2025, 1, start_day),
        end: date(2025, 1, end_day),
    }
}

fn overlap_days(a1: u32, a2: u32, b1: u32, b2: u32) -> bool {
    ranges_overlap(date(2025, 1, a1), date(2025, 1, a2), date(2025, 1, b1), date(2025, 1, b2))
}

#[test]
fn touching_endpoints_do_not_overlap() {
    // [Jan 1, Jan 5) and [Jan 5, Jan 10) share only the boundary day
    assert!(!overlap_days(1, 5, 5, 10));
    assert!(overlap_days(1, 6, 5, 10));
}

#[test]
fn overlap_is_symmetric() {
    let cases = [(1, 6, 5, 10), (1, 5, 5, 10), (10, 12, 1, 31), (1, 3, 20, 25)];
    for (a1, a2, b1, b2) in cases {
        assert_eq!(overlap_days(a1, a2, b1, b2), overlap_days(b1, b2, a1, a2));
    }
}

#[test]
fn containment_overlaps() {
    assert!(overlap_days(1, 31, 10, 12));
}

#[test]
fn disjoint_ranges_do_not_overlap() {
    assert!(!overlap_days(1, 3, 20, 25));
}

#[test]
fn conflict_requires_the_same_work_center() {
    let existing = vec![order("wo-001", "wc-001", 5, 10)];

    let same_center = interval("wc-001", 8, 12);
    assert_eq!(find_conflict(&same_center, &existing, None).map(|o| o.id.as_str()), Some("wo-001"));

    let other_center = interval("wc-002", 8, 12);
    assert!(find_conflict(&other_center, &existing, None).is_none());
}

#[test]
fn adjacent_orders_do_not_conflict() {
    let existing = vec![order("wo-001", "wc-001", 5, 10)];
    let adjacent = interval("wc-001", 10, 15);
    assert!(find_conflict(&adjacent, &existing, None).is_none());
}

#[test]
fn excluded_order_is_skipped() {
    let existing = vec![order("wo-001", "wc-001", 5, 10)];
    let moved = interval("wc-001", 6, 9);

    // An edit never conflicts with the order being edited
    assert!(find_conflict(&moved, &existing, Some("wo-001")).is_none());
    // Excluding some other id changes nothing
    assert_eq!(
        find_conflict(&moved, &existing, Some("wo-999")).map(|o| o.id.as_str()),
        Some("wo-001")
    );
}

#[test]
fn first_blocker_in_input_order_wins() {
    let existing = vec![
        order("wo-001", "wc-001", 20, 25),
        order("wo-002", "wc-001", 5, 10),
    ];
    let wide = interval("wc-001", 1, 31);
    assert_eq!(find_conflict(&wide, &existing, None).map(|o| o.id.as_str()), Some("wo-001"));
}

#[test]
fn interval_borrows_order_fields() {
    let wo = order("wo-007", "wc-003", 2, 8);
    let iv = ScheduledInterval::from(&wo);
    assert_eq!(iv.work_center_id, "wc-003");
    assert_eq!(iv.start, date(2025, 1, 2));
    assert_eq!(iv.end, date(2025, 1, 8));
}
