use std::path::Path;

use crate::calendar::format_iso;
use crate::model::WorkOrder;
use crate::store::StoreResult;

/// Export work orders to a semicolon-delimited CSV file matching the import
/// format.
///
/// Columns: Name ; Work Center ; Status ; Start Date ; End Date
/// Dates are formatted as ISO `YYYY-MM-DD`.
/// Returns the number of orders written.
pub fn export_work_orders(orders: &[WorkOrder], path: &Path) -> StoreResult<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(["Name", "Work Center", "Status", "Start Date", "End Date"])?;

    for order in orders {
        let start = format_iso(order.start);
        let end = format_iso(order.end);
        wtr.write_record([
            order.name.as_str(),
            order.work_center_id.as_str(),
            order.status.label(),
            start.as_str(),
            end.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(orders.len())
}
