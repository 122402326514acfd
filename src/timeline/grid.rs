use chrono::NaiveDateTime;

use crate::timeline::columns::{generate_columns, TimeColumn};
use crate::timeline::position::{self, BarPosition};
use crate::timeline::zoom::{DateRange, ZoomLevel};

/// Host-side assembly of the timeline: owns the current zoom level and
/// anchor date and keeps the derived range and columns in step with them.
#[derive(Debug, Clone)]
pub struct TimelineGrid {
    zoom: ZoomLevel,
    anchor: NaiveDateTime,
    range: DateRange,
    columns: Vec<TimeColumn>,
}

impl TimelineGrid {
    pub fn new(zoom: ZoomLevel, anchor: NaiveDateTime) -> Self {
        let range = zoom.visible_range(anchor);
        let columns = generate_columns(&range, zoom);
        Self {
            zoom,
            anchor,
            range,
            columns,
        }
    }

    pub fn zoom(&self) -> ZoomLevel {
        self.zoom
    }

    pub fn anchor(&self) -> NaiveDateTime {
        self.anchor
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn columns(&self) -> &[TimeColumn] {
        &self.columns
    }

    pub fn column_width(&self) -> f32 {
        self.zoom.column_width()
    }

    /// Total width in pixels of the rendered columns.
    pub fn total_width(&self) -> f32 {
        self.columns.iter().map(|column| column.width).sum()
    }

    pub fn set_zoom(&mut self, zoom: ZoomLevel) {
        self.zoom = zoom;
        self.recompute();
    }

    pub fn set_anchor(&mut self, anchor: NaiveDateTime) {
        self.anchor = anchor;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.range = self.zoom.visible_range(self.anchor);
        self.columns = generate_columns(&self.range, self.zoom);
    }

    /// Convert a date to an x-pixel offset from the range start.
    pub fn date_to_x(&self, date: NaiveDateTime) -> f32 {
        position::date_to_pixel(date, self.range.start, self.zoom, self.column_width())
    }

    /// Convert an x-pixel offset back to the clicked slot's date.
    pub fn x_to_date(&self, x: f32) -> NaiveDateTime {
        position::pixel_to_date(x, &self.range, self.zoom, self.column_width())
    }

    /// Bar placement for a scheduled interval.
    pub fn bar_position(&self, start: NaiveDateTime, end: NaiveDateTime) -> BarPosition {
        position::bar_position(start, end, self.range.start, self.zoom, self.column_width())
    }

    /// Today-marker offset, or `None` when today is not visible.
    pub fn today_x(&self, today: NaiveDateTime) -> Option<f32> {
        position::today_position(today, &self.range, self.zoom, self.column_width())
    }
}
