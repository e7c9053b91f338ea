pub mod learning;
pub mod leave_modal;
pub mod overview;

pub use learning::LearningPanel;
pub use leave_modal::LeaveModal;
pub use overview::{HrPanel, OverviewPanel};
