// Module declarations
mod app;
pub mod dashboard;
pub mod placeholder;
pub mod shell;
pub mod splash;
#[cfg(test)]
mod test_support;

// Re-exports for external use
pub use app::{App, UIConfig, run};
