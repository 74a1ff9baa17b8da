//! Row serialization for data exports
//!
//! This module implements strategies for serializing dataset rows into
//! the export data formats, with a factory keyed on the requested type.

mod csv;
mod dispatcher;
mod factory;
mod serializer;
mod tests;

pub use csv::CsvSerializer;
pub use dispatcher::export_dataset;
pub use factory::{DataType, SerializerFactory};
pub use serializer::DataSerializer;
