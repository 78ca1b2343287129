// Core business logic module

pub mod config;
pub mod parsers;
pub mod query;
pub mod report;

// Re-export commonly used items
pub use config::QueryConfig;
pub use parsers::{Password, NO_PASSWORD};
pub use query::{NetworkInfo, NetworkInfoQuery, QueryState};
pub use report::{Diagnostic, LogReporter, Reporter};
