//! The coordinate engine: visible window, column tiling and date/pixel
//! mapping for the scheduling board.

pub mod columns;
pub mod grid;
pub mod position;
pub mod zoom;

pub use columns::{generate_columns, TimeColumn};
pub use grid::TimelineGrid;
pub use position::{
    bar_position, date_to_pixel, pixel_to_date, today_position, BarPosition, BAR_PADDING_LEFT,
    BAR_PADDING_TOTAL, MIN_BAR_WIDTH,
};
pub use zoom::{DateRange, ZoomLevel};
