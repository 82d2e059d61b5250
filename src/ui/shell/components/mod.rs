//! Shell component modules

pub mod footer;
pub mod sidebar;
pub mod topbar;
