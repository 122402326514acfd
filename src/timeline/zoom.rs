use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calendar::{
    add_days, add_hours, add_months, add_weeks, end_of_month, end_of_week, start_of_month,
    start_of_week,
};

/// Time granularity of the visible timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomLevel {
    Hour,
    Day,
    Week,
    Month,
}

/// A visible window on the time axis. `end` is the last visible instant;
/// generated columns never step past it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDateTime) -> bool {
        date >= self.start && date <= self.end
    }
}

impl ZoomLevel {
    pub const ALL: [ZoomLevel; 4] = [
        ZoomLevel::Hour,
        ZoomLevel::Day,
        ZoomLevel::Week,
        ZoomLevel::Month,
    ];

    /// Fixed pixel width of one column at this level.
    pub fn column_width(self) -> f32 {
        match self {
            ZoomLevel::Hour => 60.0,
            ZoomLevel::Day => 120.0,
            ZoomLevel::Week | ZoomLevel::Month => 180.0,
        }
    }

    /// Display label for zoom pickers.
    pub fn label(self) -> &'static str {
        match self {
            ZoomLevel::Hour => "Hour",
            ZoomLevel::Day => "Day",
            ZoomLevel::Week => "Week",
            ZoomLevel::Month => "Month",
        }
    }

    /// The window shown around an anchor date at this level.
    ///
    /// Hour and Day windows are symmetric around the anchor. Week and Month
    /// snap to period boundaries, so columns align with calendar weeks and
    /// months.
    pub fn visible_range(self, anchor: NaiveDateTime) -> DateRange {
        match self {
            ZoomLevel::Hour => DateRange::new(add_hours(anchor, -12), add_hours(anchor, 12)),
            ZoomLevel::Day => DateRange::new(add_days(anchor, -7), add_days(anchor, 7)),
            ZoomLevel::Week => {
                let week_start = start_of_week(anchor);
                DateRange::new(
                    add_weeks(week_start, -4),
                    end_of_week(add_weeks(week_start, 4)),
                )
            }
            ZoomLevel::Month => {
                let month_start = start_of_month(anchor);
                DateRange::new(
                    add_months(month_start, -3),
                    end_of_month(add_months(month_start, 3)),
                )
            }
        }
    }
}
