//! The server-rendered dashboard with charts and tables of the reports.

mod charts;
mod page;

pub use page::get_dashboard_page;
