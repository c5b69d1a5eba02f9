pub mod components;
pub mod dashboard;
pub mod posting;
pub mod utils;
pub mod view_model;

pub use dashboard::HostDashboardPage;
pub use posting::PostSessionPage;
