use std::sync::Arc;

use async_graphql::extensions::{Extension, ExtensionContext, ExtensionFactory, NextParseQuery};
use async_graphql::parser::types::{
    DocumentOperations, ExecutableDocument, OperationDefinition as ParsedOperation, OperationType,
    Selection as ParsedSelection,
};
use async_graphql::{BatchRequest, Positioned, Request, ServerResult, Variables};

use crate::adapters::sinks::TracingSink;
use crate::entities::{
    Document, GraphQLRequest, OperationDefinition, OperationKind, RequestBody, RequestScope,
    Selection,
};
use crate::options::LoggingOptions;
use crate::use_cases::assemble_and_emit;
use crate::use_cases::ports::LogSink;

/// async-graphql extension factory emitting one log record per executed
/// operation.
///
/// Register it on the schema at build time; at request time the host attaches
/// an `Arc<RequestScope>` to the request data (see [`attach_scope`]).
/// Executions without a scope are not logged.
pub struct OperationLogging {
    options: Arc<LoggingOptions>,
    sink: Arc<dyn LogSink>,
}

impl OperationLogging {
    pub fn new(options: LoggingOptions) -> Self {
        Self {
            options: Arc::new(options),
            sink: Arc::new(TracingSink::new()),
        }
    }

    /// Replace the default tracing sink
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }
}

impl ExtensionFactory for OperationLogging {
    fn create(&self) -> Arc<dyn Extension> {
        Arc::new(OperationLoggingExtension {
            options: self.options.clone(),
            sink: self.sink.clone(),
        })
    }
}

struct OperationLoggingExtension {
    options: Arc<LoggingOptions>,
    sink: Arc<dyn LogSink>,
}

#[async_trait::async_trait]
impl Extension for OperationLoggingExtension {
    async fn parse_query(
        &self,
        ctx: &ExtensionContext<'_>,
        query: &str,
        variables: &Variables,
        next: NextParseQuery<'_>,
    ) -> ServerResult<ExecutableDocument> {
        let document = next.run(ctx, query, variables).await?;
        if let Some(scope) = ctx.data_opt::<Arc<RequestScope>>() {
            let parsed = document_from_executable(&document);
            assemble_and_emit(
                &self.options,
                Some(scope.as_ref()),
                &parsed,
                self.sink.as_ref(),
            );
        }
        Ok(document)
    }
}

/// Reduce a parsed executable document to the entity model.
///
/// Named operations live in a name-keyed map which loses source order;
/// sorting by position restores it. Top-level fragment spreads and inline
/// fragments carry no field name and are skipped.
pub fn document_from_executable(document: &ExecutableDocument) -> Document {
    let definitions = match &document.operations {
        DocumentOperations::Single(operation) => vec![convert_operation(None, operation)],
        DocumentOperations::Multiple(operations) => {
            let mut operations: Vec<_> = operations.iter().collect();
            operations.sort_by_key(|(_, operation)| (operation.pos.line, operation.pos.column));
            operations
                .into_iter()
                .map(|(name, operation)| convert_operation(Some(name.to_string()), operation))
                .collect()
        }
    };
    Document { definitions }
}

fn convert_operation(
    name: Option<String>,
    operation: &Positioned<ParsedOperation>,
) -> OperationDefinition {
    let kind = match operation.node.ty {
        OperationType::Query => OperationKind::Query,
        OperationType::Mutation => OperationKind::Mutation,
        OperationType::Subscription => OperationKind::Subscription,
    };
    let selections = operation
        .node
        .selection_set
        .node
        .items
        .iter()
        .filter_map(|selection| match &selection.node {
            ParsedSelection::Field(field) => {
                let mut converted = Selection::new(field.node.name.node.as_str());
                if let Some(alias) = &field.node.alias {
                    converted = converted.with_alias(alias.node.as_str());
                }
                Some(converted)
            }
            ParsedSelection::FragmentSpread(_) | ParsedSelection::InlineFragment(_) => None,
        })
        .collect();
    OperationDefinition {
        kind,
        name,
        selections,
    }
}

/// Snapshot the raw transport body of a (possibly batched) request
pub fn request_body_from_batch(batch: &BatchRequest) -> RequestBody {
    match batch {
        BatchRequest::Single(request) => RequestBody::Single(entry_from_request(request)),
        BatchRequest::Batch(requests) => {
            RequestBody::Batch(requests.iter().map(entry_from_request).collect())
        }
    }
}

fn entry_from_request(request: &Request) -> GraphQLRequest {
    let mut entry = GraphQLRequest::new(request.query.clone());
    if let Some(name) = &request.operation_name {
        entry = entry.with_operation_name(name);
    }
    if !request.variables.is_empty() {
        if let Ok(variables) = serde_json::to_value(&request.variables) {
            entry = entry.with_variables(variables);
        }
    }
    entry
}

/// Attach one shared scope to every request of a batch, so each member
/// execution can re-associate itself with its own entry of the raw body
pub fn attach_scope(batch: &mut BatchRequest, scope: Arc<RequestScope>) {
    for request in batch.iter_mut() {
        request.data.insert(scope.clone());
    }
}
