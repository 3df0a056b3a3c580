mod document;
mod record;
mod request;
mod scope;
mod transport;

pub use document::{Document, OperationDefinition, OperationKind, Selection};
pub use record::{GraphQLDetails, LogMessage, LogRecord};
pub use request::{GraphQLRequest, RequestBody};
pub use scope::{RequestScope, DEFAULT_CORRELATION_LABEL};
pub use transport::TransportRequest;
