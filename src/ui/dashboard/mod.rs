//! Dashboard view
//!
//! Split into state, renderer, components and formatting helpers

pub mod components;
pub mod renderer;
pub mod state;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_dashboard;
pub use state::{DashboardView, LoadState};
