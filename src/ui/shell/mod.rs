//! Navigation shell
//!
//! Sidebar, top bar and the routed content area around them

pub mod components;
pub mod renderer;
pub mod state;

pub use renderer::{menu_hit, render_shell, shell_layout};
pub use state::{Content, NavigationShell};
