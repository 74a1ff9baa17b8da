//! Payload delivery
//!
//! This module implements the "deliver bytes as a named download"
//! capability behind a sink trait with scoped-resource discipline.

mod file_sink;
mod memory_sink;
mod sink;

pub use file_sink::FileSink;
pub use memory_sink::MemorySink;
pub use sink::DeliverySink;
