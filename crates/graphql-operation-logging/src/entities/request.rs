use serde_json::Value;

/// One transport-level GraphQL request entry
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLRequest {
    pub query: String,
    pub operation_name: Option<String>,
    pub variables: Option<Value>,
}

impl GraphQLRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: None,
        }
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = Some(variables);
        self
    }
}

/// The raw request body as received by the transport layer.
///
/// A batch carries several independent entries but exists only once for the
/// whole transport request; per-operation invocations re-associate themselves
/// with their entry through the resolved operation name.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Single(GraphQLRequest),
    Batch(Vec<GraphQLRequest>),
}

impl RequestBody {
    pub fn is_batch(&self) -> bool {
        matches!(self, RequestBody::Batch(_))
    }
}

impl From<GraphQLRequest> for RequestBody {
    fn from(request: GraphQLRequest) -> Self {
        RequestBody::Single(request)
    }
}

impl From<Vec<GraphQLRequest>> for RequestBody {
    fn from(requests: Vec<GraphQLRequest>) -> Self {
        RequestBody::Batch(requests)
    }
}
