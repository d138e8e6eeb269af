pub mod dashboard;
pub mod view;

pub use dashboard::DashboardController;
pub use view::{LoadState, ViewController};
