pub mod components;
pub mod layout;
pub mod panel;
pub mod repository;

pub use panel::DashboardPage;
