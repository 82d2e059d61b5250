//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod activity;
pub mod chart_panel;
pub mod stat_panel;
