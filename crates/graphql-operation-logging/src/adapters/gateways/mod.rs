#[cfg(feature = "async-graphql")]
mod async_graphql;

#[cfg(feature = "async-graphql")]
pub use self::async_graphql::{
    attach_scope, document_from_executable, request_body_from_batch, OperationLogging,
};
