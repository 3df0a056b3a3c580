use crate::entities::{LogMessage, LogRecord};
use crate::options::Severity;
use crate::use_cases::ports::LogSink;

/// Default sink: one `tracing` event per record at the mapped level.
///
/// The serialized record is attached as the `record` field under the
/// `graphql_operation` target, the rendered message (if any) becomes the
/// event message.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn emit(&self, level: Severity, record: &LogRecord, message: Option<&LogMessage>) {
        let payload = record.to_value();
        let message = message.map(LogMessage::render).unwrap_or_default();
        match level {
            Severity::Trace => {
                tracing::trace!(target: "graphql_operation", record = %payload, "{}", message)
            }
            Severity::Debug => {
                tracing::debug!(target: "graphql_operation", record = %payload, "{}", message)
            }
            Severity::Info => {
                tracing::info!(target: "graphql_operation", record = %payload, "{}", message)
            }
            Severity::Warn => {
                tracing::warn!(target: "graphql_operation", record = %payload, "{}", message)
            }
            Severity::Error => {
                tracing::error!(target: "graphql_operation", record = %payload, "{}", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::GraphQLDetails;

    #[test]
    fn test_emit_accepts_every_severity() {
        let sink = TracingSink::new();
        let record = LogRecord {
            correlation_label: "reqId".to_string(),
            request_id: Some("req-1".to_string()),
            request: None,
            graphql: GraphQLDetails::default(),
        };
        for level in [
            Severity::Trace,
            Severity::Debug,
            Severity::Info,
            Severity::Warn,
            Severity::Error,
        ] {
            sink.emit(level, &record, Some(&LogMessage::text("hello")));
            sink.emit(level, &record, None);
        }
    }
}
