//! Rolodex UI crate - the embedded dashboard.

pub mod dashboard;

pub use dashboard::DASHBOARD_HTML;
