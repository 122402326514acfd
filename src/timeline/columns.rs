use chrono::NaiveDateTime;

use crate::calendar::{
    add_days, add_hours, add_months, add_weeks, end_of_week, format_date, start_of_day,
    start_of_hour, start_of_month, start_of_week, week_number,
};
use crate::timeline::zoom::{DateRange, ZoomLevel};

/// One discrete slot of the time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeColumn {
    /// Canonical start instant of the slot.
    pub date: NaiveDateTime,
    pub label: String,
    pub width: f32,
}

/// Tile a visible range with columns for the given zoom level.
///
/// The first column starts at the period boundary at or before
/// `range.start`; stepping stops once a column would start past `range.end`.
/// A range with `start > end` yields no columns.
pub fn generate_columns(range: &DateRange, zoom: ZoomLevel) -> Vec<TimeColumn> {
    if range.start > range.end {
        return Vec::new();
    }

    let width = zoom.column_width();
    let mut columns = Vec::new();
    match zoom {
        ZoomLevel::Hour => {
            let mut date = start_of_hour(range.start);
            while date <= range.end {
                columns.push(TimeColumn {
                    date,
                    label: date.format("%H:00").to_string(),
                    width,
                });
                date = add_hours(date, 1);
            }
        }
        ZoomLevel::Day => {
            let mut date = start_of_day(range.start);
            while date <= range.end {
                columns.push(TimeColumn {
                    date,
                    label: format_date(date, "ddd MM/DD"),
                    width,
                });
                date = add_days(date, 1);
            }
        }
        ZoomLevel::Week => {
            let mut date = start_of_week(range.start);
            while date <= range.end {
                let label = format!(
                    "W{}: {} - {}",
                    week_number(date),
                    format_date(date, "MMM DD"),
                    format_date(end_of_week(date), "MMM DD"),
                );
                columns.push(TimeColumn { date, label, width });
                date = add_weeks(date, 1);
            }
        }
        ZoomLevel::Month => {
            let mut date = start_of_month(range.start);
            while date <= range.end {
                columns.push(TimeColumn {
                    date,
                    label: format_date(date, "MMMM YYYY"),
                    width,
                });
                date = add_months(date, 1);
            }
        }
    }
    columns
}
