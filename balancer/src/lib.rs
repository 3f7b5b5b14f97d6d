mod config;
mod report;
pub use config::*;
pub use report::*;
