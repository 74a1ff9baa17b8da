//! Delivery sink trait definition

use crate::export::errors::ExportResult;
use crate::export::payload::NamedPayload;

/// Capability to deliver a named payload to its destination
///
/// Any platform resource a sink creates to perform a delivery is scoped
/// to that delivery: implementations release it on every exit path,
/// including failures partway through.
pub trait DeliverySink {
    /// Deliver one payload
    fn deliver(&mut self, payload: &NamedPayload) -> ExportResult<()>;
}
