mod extension;

pub use extension::{
    attach_scope, document_from_executable, request_body_from_batch, OperationLogging,
};
