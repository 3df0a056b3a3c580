mod assemble_record;
mod extract_operations;
mod project_request;
mod resolve_operation;

pub mod ports;

pub use assemble_record::assemble_and_emit;
pub use extract_operations::extract_operation_names;
pub use project_request::{project_body, project_variables};
pub use resolve_operation::{resolve_operation_name, resolve_request_entry};
