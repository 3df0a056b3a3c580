use crate::entities::{LogMessage, LogRecord};
use crate::options::Severity;

/// Trait for the host logging sink consumed by the assembler.
///
/// The component owns no file or network sink of its own; one record is
/// handed over per executed operation and the sink decides how to write it.
pub trait LogSink: Send + Sync {
    fn emit(&self, level: Severity, record: &LogRecord, message: Option<&LogMessage>);
}
