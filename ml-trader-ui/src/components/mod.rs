//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod card;
pub mod header;
pub mod loading;
pub mod metric_card;
pub mod price_chart;
pub mod sidebar;

pub use card::Card;
pub use header::Header;
pub use loading::Loading;
pub use metric_card::{Accent, MetricCard};
pub use price_chart::PriceChart;
pub use sidebar::Sidebar;
