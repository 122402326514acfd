use std::fs;

use chrono::NaiveDate;
use tempfile::tempdir;
use work_order_timeline::model::{Board, WorkCenter, WorkOrder, WorkOrderStatus};
use work_order_timeline::store::{
    export_work_orders, import_work_orders, load_board, load_or_sample, save_board, StoreError,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_board_on_disk() -> Board {
    let mut board = Board::new("Line Schedule");
    board.add_work_center(WorkCenter::new("wc-001", "Extrusion Line A"));
    board.add_work_center(WorkCenter::new("wc-002", "CNC Mill 3"));
    board
        .add_work_order(WorkOrder::new(
            "Order Alpha",
            "wc-001",
            WorkOrderStatus::Open,
            date(2025, 1, 6),
            date(2025, 1, 10),
        ))
        .unwrap();
    board
        .add_work_order(WorkOrder::new(
            "Order Beta",
            "wc-002",
            WorkOrderStatus::InProgress,
            date(2025, 1, 8),
            date(2025, 1, 15),
        ))
        .unwrap();
    board
}

#[test]
fn board_survives_a_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.json");
    let board = sample_board_on_disk();

    save_board(&board, &path).unwrap();
    let loaded = load_board(&path).unwrap();

    assert_eq!(loaded.name, board.name);
    assert_eq!(loaded.work_centers, board.work_centers);
    assert_eq!(loaded.work_orders, board.work_orders);
    assert_eq!(loaded.created, board.created);
    assert_eq!(loaded.modified, board.modified);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deep").join("board.json");

    save_board(&sample_board_on_disk(), &path).unwrap();
    assert!(path.exists());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let result = load_board(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(StoreError::Io(_))));
}

#[test]
fn malformed_json_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.json");
    fs::write(&path, "not a board").unwrap();
    assert!(matches!(load_board(&path), Err(StoreError::Json(_))));
}

#[test]
fn load_or_sample_falls_back_on_missing_file() {
    let dir = tempdir().unwrap();
    let board = load_or_sample(&dir.path().join("absent.json"));
    assert_eq!(board.work_centers.len(), 5);
    assert_eq!(board.work_orders.len(), 508);
}

#[test]
fn load_or_sample_rejects_a_board_without_centers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("board.json");
    save_board(&Board::new("Empty"), &path).unwrap();

    let board = load_or_sample(&path);
    assert_eq!(board.work_centers.len(), 5);
}

#[test]
fn csv_round_trip_preserves_fields_with_fresh_ids() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.csv");
    let orders = vec![
        WorkOrder::new(
            "Order Alpha",
            "wc-001",
            WorkOrderStatus::Open,
            date(2025, 1, 6),
            date(2025, 1, 10),
        ),
        WorkOrder::new(
            "Order Beta",
            "wc-002",
            WorkOrderStatus::InProgress,
            date(2025, 2, 3),
            date(2025, 2, 14),
        ),
        WorkOrder::new(
            "Order Gamma",
            "wc-001",
            WorkOrderStatus::Blocked,
            date(2025, 3, 1),
            date(2025, 3, 4),
        ),
    ];

    let written = export_work_orders(&orders, &path).unwrap();
    assert_eq!(written, 3);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Name;Work Center;Status;Start Date;End Date"));
    assert!(content.contains("Order Beta;wc-002;In Progress;2025-02-03;2025-02-14"));

    let (imported, skipped) = import_work_orders(&path).unwrap();
    assert_eq!(skipped, 0);
    assert_eq!(imported.len(), orders.len());
    for (got, want) in imported.iter().zip(&orders) {
        assert_eq!(got.name, want.name);
        assert_eq!(got.work_center_id, want.work_center_id);
        assert_eq!(got.status, want.status);
        assert_eq!(got.start, want.start);
        assert_eq!(got.end, want.end);
        // Imports are new orders, never id collisions with the source
        assert_ne!(got.id, want.id);
        assert!(got.id.starts_with("wo-"));
    }
}

#[test]
fn import_detects_comma_delimited_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.csv");
    fs::write(
        &path,
        "Name,Work Center,Status,Start Date,End Date\n\
         Widget Run,wc-001,In Progress,2025-01-06,2025-01-10\n",
    )
    .unwrap();

    let (orders, skipped) = import_work_orders(&path).unwrap();
    assert_eq!(skipped, 0);
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].name, "Widget Run");
    assert_eq!(orders[0].status, WorkOrderStatus::InProgress);
    assert_eq!(orders[0].start, date(2025, 1, 6));
    assert_eq!(orders[0].end, date(2025, 1, 10));
}

#[test]
fn import_detects_tab_delimited_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.tsv");
    fs::write(
        &path,
        "Name\tWork Center\tStatus\tStart Date\tEnd Date\n\
         Widget Run\twc-001\tOpen\t2025-01-06\t2025-01-10\n",
    )
    .unwrap();

    let (orders, _) = import_work_orders(&path).unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].work_center_id, "wc-001");
}

#[test]
fn import_matches_header_aliases_and_day_first_dates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.csv");
    fs::write(
        &path,
        "Order;Machine;State;Begin;Due\n\
         Gadget;wc-002;done;06/01/2025;10/01/2025\n",
    )
    .unwrap();

    let (orders, skipped) = import_work_orders(&path).unwrap();
    assert_eq!(skipped, 0);
    assert_eq!(orders[0].name, "Gadget");
    assert_eq!(orders[0].work_center_id, "wc-002");
    assert_eq!(orders[0].status, WorkOrderStatus::Complete);
    // Slash dates read day-first
    assert_eq!(orders[0].start, date(2025, 1, 6));
    assert_eq!(orders[0].end, date(2025, 1, 10));
}

#[test]
fn import_skips_bad_rows_and_counts_them() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.csv");
    fs::write(
        &path,
        "Name;Work Center;Status;Start Date;End Date\n\
         Good Row;wc-001;Open;2025-01-06;2025-01-10\n\
         Bad Date;wc-001;Open;sometime;2025-01-10\n\
         ;wc-001;Open;2025-01-06;2025-01-10\n\
         No Center;;Open;2025-01-06;2025-01-10\n",
    )
    .unwrap();

    let (orders, skipped) = import_work_orders(&path).unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].name, "Good Row");
    assert_eq!(skipped, 3);
}

#[test]
fn import_clamps_inverted_date_ranges() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.csv");
    fs::write(
        &path,
        "Name;Work Center;Status;Start Date;End Date\n\
         Backwards;wc-001;Open;2025-01-10;2025-01-05\n",
    )
    .unwrap();

    let (orders, _) = import_work_orders(&path).unwrap();
    assert_eq!(orders[0].start, date(2025, 1, 10));
    assert_eq!(orders[0].end, date(2025, 1, 10));
}

#[test]
fn import_requires_the_core_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.csv");
    fs::write(&path, "Name;Status;Notes\nOrder Alpha;Open;hi\n").unwrap();

    match import_work_orders(&path) {
        Err(StoreError::MissingColumns { found }) => {
            assert_eq!(found, vec!["Name", "Status", "Notes"]);
        }
        other => panic!("expected missing columns, got {other:?}"),
    }
}

#[test]
fn header_only_file_has_no_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.csv");
    fs::write(&path, "Name;Work Center;Status;Start Date;End Date\n").unwrap();
    assert!(matches!(import_work_orders(&path), Err(StoreError::EmptyCsv)));
}

#[test]
fn all_invalid_rows_report_the_skip_count() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("orders.csv");
    fs::write(
        &path,
        "Name;Work Center;Status;Start Date;End Date\n\
         One;wc-001;Open;bad;2025-01-10\n\
         Two;wc-001;Open;2025-01-06;worse\n",
    )
    .unwrap();

    match import_work_orders(&path) {
        Err(StoreError::NoValidRows { skipped }) => assert_eq!(skipped, 2),
        other => panic!("expected no valid rows, got {other:?}"),
    }
}
