use crate::entities::{Document, GraphQLRequest, RequestBody};

/// Determine which named operation this execution corresponds to.
///
/// An `operationName` declared on a single request body wins unconditionally,
/// even when it matches no definition in the document (pass-through, no
/// validation). Otherwise the first named definition in document order is
/// used; all-anonymous documents resolve to `None`. A batch body declares no
/// name of its own.
pub fn resolve_operation_name(body: &RequestBody, document: &Document) -> Option<String> {
    if let RequestBody::Single(request) = body {
        if let Some(name) = &request.operation_name {
            return Some(name.clone());
        }
    }

    document
        .definitions
        .iter()
        .find_map(|definition| definition.name.clone())
}

/// Re-associate the execution with its request entry.
///
/// A single body always resolves to its one entry. A batch is only searched
/// when detailed (body or variable) logging demands it, matching entries by
/// `operationName`; no match degrades to `None` rather than an error.
pub fn resolve_request_entry<'a>(
    body: &'a RequestBody,
    operation_name: Option<&str>,
    detailed: bool,
) -> Option<&'a GraphQLRequest> {
    match body {
        RequestBody::Single(request) => Some(request),
        RequestBody::Batch(requests) if detailed => requests
            .iter()
            .find(|request| request.operation_name.as_deref() == operation_name),
        RequestBody::Batch(_) => None,
    }
}
