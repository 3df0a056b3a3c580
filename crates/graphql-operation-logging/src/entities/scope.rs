use super::{RequestBody, TransportRequest};

/// Default label under which the request id is logged
pub const DEFAULT_CORRELATION_LABEL: &str = "reqId";

/// Capability struct threading the per-request context into the assembler.
///
/// The host builds one scope per transport request and attaches it to every
/// operation execution it triggers. Executions without a scope (programmatic,
/// in-process calls) are valid and simply not logged.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestScope {
    pub body: RequestBody,
    pub transport: Option<TransportRequest>,
    pub request_id: Option<String>,
    pub correlation_label: String,
}

impl RequestScope {
    pub fn new(body: impl Into<RequestBody>) -> Self {
        Self {
            body: body.into(),
            transport: None,
            request_id: None,
            correlation_label: DEFAULT_CORRELATION_LABEL.to_string(),
        }
    }

    pub fn with_transport(mut self, transport: TransportRequest) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// Override the correlation label when the host's convention differs
    pub fn with_correlation_label(mut self, label: impl Into<String>) -> Self {
        self.correlation_label = label.into();
        self
    }
}
