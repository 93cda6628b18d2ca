//! Pipeline module - dataset loading and chart projection

pub mod aggregate;
pub mod churn;
pub mod columns;
pub mod config;
pub mod loader;
pub mod project;
pub mod radar;
pub mod scatter;
pub mod stacked;

pub use aggregate::*;
pub use churn::*;
pub use columns::*;
pub use config::*;
pub use loader::*;
pub use project::*;
pub use radar::*;
pub use scatter::*;
pub use stacked::*;
