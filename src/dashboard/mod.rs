//! Dashboard module
//!
//! Provides the single page with the transaction form, the transaction list
//! and the charts, plus the aggregations the charts are drawn from.

mod aggregation;
mod charts;
mod handlers;

pub use aggregation::{CategoryTotal, MonthTotal};
pub(crate) use aggregation::{category_totals, month_totals};
pub use handlers::{DashboardState, get_dashboard_page, get_summary};
