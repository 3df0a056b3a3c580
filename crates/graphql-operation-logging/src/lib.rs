//! GraphQL Operation Logging
//!
//! Emits one structured log record per executed GraphQL operation: which
//! named queries/mutations ran, and optionally the operation name, raw query
//! text, variables and the originating transport request: at a configurable
//! severity with an optional custom message.
//!
//! Logging is strictly observational. A missing request scope skips the
//! record, user-supplied hooks are contained when they misbehave, and nothing
//! here can alter the response of the operation being logged.
//!
//! # Example
//!
//! ```rust,no_run
//! use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};
//! use graphql_operation_logging::{LoggingOptions, OperationLogging};
//!
//! struct Query;
//!
//! #[Object]
//! impl Query {
//!     async fn counter(&self) -> i32 {
//!         0
//!     }
//! }
//!
//! fn main() {
//!     let schema = Schema::build(Query, EmptyMutation, EmptySubscription)
//!         .extension(OperationLogging::new(
//!             LoggingOptions::new()
//!                 .with_prepend_alias(true)
//!                 .with_log_variables(true),
//!         ))
//!         .finish();
//!     let _ = schema;
//! }
//! ```
//!
//! At request time the host builds a [`entities::RequestScope`] from the
//! transport request and attaches it to the (possibly batched) GraphQL
//! request with [`attach_scope`]; executions without a scope emit nothing.

mod adapters;
pub mod entities;
pub mod error;
pub mod options;
pub mod use_cases;

pub use error::LoggingError;
pub use options::{BodyLogging, LoggingOptions, Severity};

pub use adapters::sinks::TracingSink;

#[cfg(feature = "async-graphql")]
pub use adapters::gateways::{
    attach_scope, document_from_executable, request_body_from_batch, OperationLogging,
};

use entities::{LogMessage, LogRecord};
use use_cases::ports::LogSink;

/// One emission captured by [`MemorySink`]
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedRecord {
    pub level: Severity,
    pub record: LogRecord,
    pub message: Option<LogMessage>,
}

/// In-memory sink implementation using a thread-safe vector.
///
/// Useful in tests and for embedders that forward records themselves.
pub struct MemorySink {
    records: std::sync::Mutex<Vec<EmittedRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            records: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything emitted so far
    pub fn records(&self) -> Vec<EmittedRecord> {
        self.records.lock().map(|records| records.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for MemorySink {
    fn emit(&self, level: Severity, record: &LogRecord, message: Option<&LogMessage>) {
        if let Ok(mut records) = self.records.lock() {
            records.push(EmittedRecord {
                level,
                record: record.clone(),
                message: message.cloned(),
            });
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::entities::{
        Document, GraphQLDetails, GraphQLRequest, LogMessage, LogRecord, OperationDefinition,
        OperationKind, RequestBody, RequestScope, Selection, TransportRequest,
    };
    pub use crate::error::LoggingError;
    pub use crate::options::{BodyLogging, LoggingOptions, Severity};
    pub use crate::use_cases::assemble_and_emit;
    pub use crate::use_cases::ports::LogSink;
    pub use crate::{EmittedRecord, MemorySink, TracingSink};

    #[cfg(feature = "async-graphql")]
    pub use crate::{attach_scope, request_body_from_batch, OperationLogging};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::GraphQLDetails;

    fn record() -> LogRecord {
        LogRecord {
            correlation_label: "reqId".to_string(),
            request_id: Some("req-1".to_string()),
            request: None,
            graphql: GraphQLDetails::default(),
        }
    }

    #[test]
    fn test_memory_sink_collects_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.emit(Severity::Info, &record(), None);
        sink.emit(Severity::Debug, &record(), Some(&LogMessage::text("hi")));

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, Severity::Info);
        assert!(records[0].message.is_none());
        assert_eq!(records[1].level, Severity::Debug);
        assert_eq!(records[1].message, Some(LogMessage::text("hi")));
    }
}
