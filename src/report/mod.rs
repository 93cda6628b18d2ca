//! Report module - rendering and exporting projected series

pub mod export;
pub mod summary;

pub use export::*;
pub use summary::*;
