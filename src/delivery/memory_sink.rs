//! In-memory delivery sink

use crate::export::errors::ExportResult;
use crate::export::payload::NamedPayload;

use super::sink::DeliverySink;

/// Collects delivered payloads in memory
///
/// Used when the export artifact is consumed programmatically rather
/// than written out, and by tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    delivered: Vec<NamedPayload>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    /// Payloads delivered so far, in delivery order
    pub fn delivered(&self) -> &[NamedPayload] {
        &self.delivered
    }

    /// Consume the sink and take the delivered payloads
    pub fn into_delivered(self) -> Vec<NamedPayload> {
        self.delivered
    }
}

impl DeliverySink for MemorySink {
    fn deliver(&mut self, payload: &NamedPayload) -> ExportResult<()> {
        self.delivered.push(payload.clone());
        Ok(())
    }
}
