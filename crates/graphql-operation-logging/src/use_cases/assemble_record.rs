use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::entities::{
    Document, GraphQLDetails, LogMessage, LogRecord, OperationKind, RequestScope,
};
use crate::options::{LoggingOptions, MessageHook};
use crate::use_cases::ports::LogSink;
use crate::use_cases::{
    extract_operation_names, project_body, project_variables, resolve_operation_name,
    resolve_request_entry,
};

/// Assemble one log record for an executed operation and hand it to the sink.
///
/// Invoked once per operation execution, after parsing and before execution.
/// Without a request scope (programmatic, in-process executions) this is a
/// no-op: no record, no error. Otherwise it always runs to the single `emit`
/// call; failures in user hooks are contained along the way and never reach
/// the caller.
pub fn assemble_and_emit(
    options: &LoggingOptions,
    scope: Option<&RequestScope>,
    document: &Document,
    sink: &dyn LogSink,
) {
    let Some(scope) = scope else {
        return;
    };

    let queries = extract_operation_names(document, OperationKind::Query, options.prepend_alias);
    let mutations =
        extract_operation_names(document, OperationKind::Mutation, options.prepend_alias);

    let operation_name = resolve_operation_name(&scope.body, document);
    let entry = resolve_request_entry(&scope.body, operation_name.as_deref(), options.wants_detail());

    let body = project_body(&options.log_body, scope, entry);
    let variables = options.log_variables.then(|| project_variables(entry));

    let record = LogRecord {
        correlation_label: scope.correlation_label.clone(),
        request_id: scope.request_id.clone(),
        request: options
            .log_request
            .then(|| scope.transport.clone())
            .flatten(),
        graphql: GraphQLDetails {
            queries: (!queries.is_empty()).then_some(queries),
            mutations: (!mutations.is_empty()).then_some(mutations),
            operation_name,
            body,
            variables,
        },
    };

    let message = options
        .log_message
        .as_ref()
        .and_then(|hook| evaluate_message_hook(hook, scope));

    sink.emit(options.level, &record, message.as_ref());
}

/// Containment wrapper around the custom message hook: a panic or a
/// malformed template yields no message and one debug diagnostic.
fn evaluate_message_hook(hook: &MessageHook, scope: &RequestScope) -> Option<LogMessage> {
    match catch_unwind(AssertUnwindSafe(|| hook(scope))) {
        Ok(Some(message)) if message.is_well_formed() => Some(message),
        Ok(Some(_)) => {
            tracing::debug!(
                target: "graphql_operation",
                "logMessage hook returned a malformed template; skipping message"
            );
            None
        }
        Ok(None) => None,
        Err(_) => {
            tracing::debug!(
                target: "graphql_operation",
                "logMessage hook panicked; skipping message"
            );
            None
        }
    }
}
