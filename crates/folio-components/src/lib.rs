//! # folio-components
//!
//! Leptos UI components for the Portfolio Analytics Dashboard.

pub mod app;
pub mod dashboard;
pub mod summary;
pub mod welcome;

pub use app::App;
pub use dashboard::*;
pub use summary::*;
pub use welcome::Welcome;
