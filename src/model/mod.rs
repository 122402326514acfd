pub mod board;
pub mod work_center;
pub mod work_order;

pub use board::{Board, BoardError};
pub use work_center::WorkCenter;
pub use work_order::{WorkOrder, WorkOrderStatus};
