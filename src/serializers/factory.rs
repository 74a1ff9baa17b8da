//! Factory for creating row serializers

use super::csv::CsvSerializer;
use super::serializer::DataSerializer;

/// Export data types a request can name
///
/// Only CSV has a wired serializer; the remaining variants are recognized
/// request values that currently produce no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Csv,
    Json,
    GeoJson,
}

impl DataType {
    /// Parse a data type from its request name
    pub fn from_name(name: &str) -> Option<DataType> {
        match name.to_lowercase().as_str() {
            "csv" => Some(DataType::Csv),
            "json" => Some(DataType::Json),
            "geojson" => Some(DataType::GeoJson),
            _ => None,
        }
    }

    /// Request name of this data type
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Csv => "csv",
            DataType::Json => "json",
            DataType::GeoJson => "geojson",
        }
    }
}

/// Factory for creating serializers by data type
pub struct SerializerFactory;

impl SerializerFactory {
    /// Create the serializer wired for the given data type
    ///
    /// Returns None for types with no wired serializer; this is the
    /// extension seam for new formats, not a failure.
    pub fn create(data_type: DataType) -> Option<Box<dyn DataSerializer>> {
        match data_type {
            DataType::Csv => Some(Box::new(CsvSerializer)),
            DataType::Json | DataType::GeoJson => None,
        }
    }

    /// Get all serializers with a wired implementation
    pub fn available() -> Vec<Box<dyn DataSerializer>> {
        vec![Box::new(CsvSerializer)]
    }
}
