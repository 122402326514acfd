use std::path::Path;

use chrono::NaiveDate;

use crate::model::{WorkOrder, WorkOrderStatus};
use crate::store::{StoreError, StoreResult};

/// Map a status cell to a work order status. Unknown values fall back to
/// open.
fn parse_status(value: &str) -> WorkOrderStatus {
    match normalize_header(value).as_str() {
        "inprogress" | "active" | "started" | "wip" => WorkOrderStatus::InProgress,
        "complete" | "completed" | "done" | "finished" | "closed" => WorkOrderStatus::Complete,
        "blocked" | "onhold" | "hold" | "stuck" => WorkOrderStatus::Blocked,
        _ => WorkOrderStatus::Open,
    }
}

/// Try parsing a date string with several common formats. Day-first wins
/// for ambiguous slash dates.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    for fmt in &["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

/// Normalize a header string to a canonical column key.
fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase().replace([' ', '-', '_'], "")
}

/// Map a normalized header to our column index:
///   0 = name, 1 = work center, 2 = status, 3 = start, 4 = end
fn header_to_col(normalized: &str) -> Option<usize> {
    match normalized {
        "name" | "workorder" | "order" | "ordername" | "task" | "label" | "title" => Some(0),

        "workcenter" | "workcenterid" | "center" | "resource" | "line" | "machine" => Some(1),

        "status" | "state" | "stage" => Some(2),

        "start" | "startdate" | "from" | "begin" | "begindate" => Some(3),

        "end" | "enddate" | "to" | "finish" | "finishdate" | "due" | "duedate" => Some(4),

        _ => None,
    }
}

/// Import work orders from a CSV file.
///
/// Auto-detects delimiter (comma, semicolon, tab) and matches column
/// headers flexibly (e.g. "Work Center", "Start Date"). Imported orders
/// receive fresh ids; the work center cell is taken verbatim as the center
/// id. Returns `(orders, skipped_count)` on success.
pub fn import_work_orders(path: &Path) -> StoreResult<(Vec<WorkOrder>, usize)> {
    // Read the whole file to detect the delimiter from the first line
    let content = std::fs::read_to_string(path)?;

    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    // Parse headers and map them to column indices
    let headers = reader.headers()?.clone();

    let col_map: Vec<Option<usize>> = headers
        .iter()
        .map(|h| header_to_col(&normalize_header(h)))
        .collect();

    // Verify we have at least name, work center, start, end
    let required_present = [0usize, 1, 3, 4]
        .iter()
        .all(|needed| col_map.iter().any(|c| *c == Some(*needed)));

    if !required_present {
        let found: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        return Err(StoreError::MissingColumns { found });
    }

    let mut orders: Vec<WorkOrder> = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("skipping csv row {}: {}", i + 2, e);
                skipped += 1;
                continue;
            }
        };

        // Extract fields by mapped column positions
        let mut name_val = None;
        let mut center_val = None;
        let mut status_val = None;
        let mut start_val = None;
        let mut end_val = None;

        for (col_idx, field) in record.iter().enumerate() {
            if col_idx < col_map.len() {
                match col_map[col_idx] {
                    Some(0) => name_val = Some(field.trim().to_string()),
                    Some(1) => center_val = Some(field.trim().to_string()),
                    Some(2) => status_val = Some(field.trim().to_string()),
                    Some(3) => start_val = Some(field.trim().to_string()),
                    Some(4) => end_val = Some(field.trim().to_string()),
                    _ => {}
                }
            }
        }

        let name = match name_val {
            Some(n) if !n.is_empty() => n,
            _ => {
                skipped += 1;
                continue;
            }
        };

        let center = match center_val {
            Some(c) if !c.is_empty() => c,
            _ => {
                log::warn!("skipping row {}: no work center for '{}'", i + 2, name);
                skipped += 1;
                continue;
            }
        };

        let start = match start_val.as_deref().and_then(parse_date) {
            Some(d) => d,
            None => {
                log::warn!(
                    "skipping row {}: invalid start date '{}'",
                    i + 2,
                    start_val.as_deref().unwrap_or("")
                );
                skipped += 1;
                continue;
            }
        };

        let end = match end_val.as_deref().and_then(parse_date) {
            Some(d) => d,
            None => {
                log::warn!(
                    "skipping row {}: invalid end date '{}'",
                    i + 2,
                    end_val.as_deref().unwrap_or("")
                );
                skipped += 1;
                continue;
            }
        };

        let status = status_val
            .as_deref()
            .map(parse_status)
            .unwrap_or(WorkOrderStatus::Open);

        orders.push(WorkOrder::new(name, center, status, start, end.max(start)));
    }

    if orders.is_empty() {
        if skipped > 0 {
            return Err(StoreError::NoValidRows { skipped });
        }
        return Err(StoreError::EmptyCsv);
    }

    Ok((orders, skipped))
}
