//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod data_explorer;
pub mod not_found;

pub use dashboard::Dashboard;
pub use data_explorer::DataExplorer;
pub use not_found::NotFound;
