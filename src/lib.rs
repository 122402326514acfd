//! Timeline coordinate engine for a work order scheduling board.
//!
//! Work orders occupy date intervals on work centers; the board lays them
//! out against a zoomable hour/day/week/month time axis. The `calendar`,
//! `conflict` and `timeline` modules form the pure engine: visible window,
//! column tiling, date/pixel mapping and overlap checks. `model`, `store`,
//! `sample` and `validation` carry the board state, its persistence and the
//! form-side helpers around that engine.

pub mod calendar;
pub mod conflict;
pub mod model;
pub mod sample;
pub mod store;
pub mod timeline;
pub mod validation;

pub use conflict::{find_conflict, ranges_overlap, ScheduledInterval};
pub use model::{Board, BoardError, WorkCenter, WorkOrder, WorkOrderStatus};
pub use store::{StoreError, StoreResult};
pub use timeline::{generate_columns, BarPosition, DateRange, TimeColumn, TimelineGrid, ZoomLevel};
