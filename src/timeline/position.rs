use chrono::{Datelike, NaiveDateTime};

use crate::calendar::{
    add_days, add_hours, add_months, add_weeks, days_in_month, difference_in_days,
    difference_in_months, start_of_hour, start_of_month, start_of_week,
};
use crate::timeline::zoom::{DateRange, ZoomLevel};

/// Left inset applied to every bar.
pub const BAR_PADDING_LEFT: f32 = 4.0;
/// Total horizontal inset removed from a bar's raw width.
pub const BAR_PADDING_TOTAL: f32 = 8.0;
/// Bars never render narrower than this.
pub const MIN_BAR_WIDTH: f32 = 80.0;

/// Horizontal placement of one work-order bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarPosition {
    pub left: f32,
    pub width: f32,
}

/// Pixel offset of a date from the range start.
///
/// Hour resolves fractional hours. Day floors to whole days; sub-day
/// precision is not supported at that level. Week and Month are fractional.
pub fn date_to_pixel(
    date: NaiveDateTime,
    range_start: NaiveDateTime,
    zoom: ZoomLevel,
    column_width: f32,
) -> f32 {
    match zoom {
        ZoomLevel::Hour => {
            let hours = (date - range_start).num_milliseconds() as f64 / 3_600_000.0;
            hours as f32 * column_width
        }
        ZoomLevel::Day => difference_in_days(date, range_start) as f32 * column_width,
        ZoomLevel::Week => difference_in_days(date, range_start) as f32 / 7.0 * column_width,
        ZoomLevel::Month => difference_in_months(date, range_start) as f32 * column_width,
    }
}

/// Bar geometry for a `[start, end)` interval, with the fixed inset and the
/// minimum-width floor applied.
pub fn bar_position(
    start: NaiveDateTime,
    end: NaiveDateTime,
    range_start: NaiveDateTime,
    zoom: ZoomLevel,
    column_width: f32,
) -> BarPosition {
    let start_x = date_to_pixel(start, range_start, zoom, column_width);
    let end_x = date_to_pixel(end, range_start, zoom, column_width);
    BarPosition {
        left: start_x + BAR_PADDING_LEFT,
        width: (end_x - start_x - BAR_PADDING_TOTAL).max(MIN_BAR_WIDTH),
    }
}

/// Pixel offset of the today marker, or `None` when today is outside the
/// range.
///
/// Week and Month place the marker by an exact whole-unit count plus an
/// in-period fraction instead of the fractional `date_to_pixel` metrics.
pub fn today_position(
    today: NaiveDateTime,
    range: &DateRange,
    zoom: ZoomLevel,
    column_width: f32,
) -> Option<f32> {
    if !range.contains(today) {
        return None;
    }

    let x = match zoom {
        ZoomLevel::Hour | ZoomLevel::Day => date_to_pixel(today, range.start, zoom, column_width),
        ZoomLevel::Week => {
            let whole_weeks =
                difference_in_days(start_of_week(today), start_of_week(range.start)) as f32 / 7.0;
            let day_fraction = today.weekday().num_days_from_monday() as f32 / 7.0;
            (whole_weeks + day_fraction) * column_width
        }
        ZoomLevel::Month => {
            let target = start_of_month(today);
            let mut cursor = start_of_month(range.start);
            let mut whole_months = 0;
            while cursor < target {
                cursor = add_months(cursor, 1);
                whole_months += 1;
            }
            let day_fraction = (today.day() - 1) as f32 / days_in_month(today) as f32;
            (whole_months as f32 + day_fraction) * column_width
        }
    };
    Some(x)
}

/// Date for a pixel offset: the canonical start of the clicked slot,
/// clamped into the range.
pub fn pixel_to_date(
    pixel_x: f32,
    range: &DateRange,
    zoom: ZoomLevel,
    column_width: f32,
) -> NaiveDateTime {
    let units = (pixel_x / column_width).floor() as i64;
    let date = match zoom {
        ZoomLevel::Hour => start_of_hour(add_hours(range.start, units)),
        ZoomLevel::Day => add_days(range.start, units),
        ZoomLevel::Week => start_of_week(add_weeks(range.start, units)),
        ZoomLevel::Month => start_of_month(add_months(range.start, units as i32)),
    };

    if date < range.start {
        range.start
    } else if date > range.end {
        range.end
    } else {
        date
    }
}
