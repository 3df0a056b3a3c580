use serde::Serialize;
use serde_json::Value;

use super::TransportRequest;

/// GraphQL-specific portion of a log record.
///
/// Every field is omitted from the serialized output when not applicable,
/// with one exception: `variables` distinguishes "logging not requested"
/// (`None`, key omitted) from "requested but the request carries none"
/// (`Some(Value::Null)`, explicit `null`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
}

/// The single artifact emitted per executed operation
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub correlation_label: String,
    pub request_id: Option<String>,
    pub request: Option<TransportRequest>,
    pub graphql: GraphQLDetails,
}

impl LogRecord {
    /// Render the record as the JSON object handed to the sink.
    ///
    /// The request-id key is dynamic (the host's correlation label), so this
    /// builds the map by hand instead of deriving `Serialize`.
    pub fn to_value(&self) -> Value {
        let mut map = serde_json::Map::new();
        if let Some(id) = &self.request_id {
            map.insert(self.correlation_label.clone(), Value::String(id.clone()));
        }
        if let Some(request) = &self.request {
            if let Ok(req) = serde_json::to_value(request) {
                map.insert("req".to_string(), req);
            }
        }
        if let Ok(graphql) = serde_json::to_value(&self.graphql) {
            map.insert("graphql".to_string(), graphql);
        }
        Value::Object(map)
    }
}

/// A free-text message attached to a record by the custom message hook
#[derive(Debug, Clone, PartialEq)]
pub enum LogMessage {
    /// Used verbatim
    Text(String),
    /// Format template plus positional arguments; every `%s` placeholder is
    /// substituted in sequence. Arguments must all be JSON strings.
    Template { template: String, args: Vec<Value> },
}

impl LogMessage {
    pub fn text(message: impl Into<String>) -> Self {
        LogMessage::Text(message.into())
    }

    pub fn template(template: impl Into<String>, args: impl IntoIterator<Item = Value>) -> Self {
        LogMessage::Template {
            template: template.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Return contract check: a template is only usable when every
    /// positional argument is a string.
    pub fn is_well_formed(&self) -> bool {
        match self {
            LogMessage::Text(_) => true,
            LogMessage::Template { args, .. } => args.iter().all(Value::is_string),
        }
    }

    /// Flatten to the final message string
    pub fn render(&self) -> String {
        match self {
            LogMessage::Text(message) => message.clone(),
            LogMessage::Template { template, args } => {
                let mut rendered = String::with_capacity(template.len());
                let mut rest = template.as_str();
                let mut args = args.iter();
                while let Some(at) = rest.find("%s") {
                    rendered.push_str(&rest[..at]);
                    match args.next().and_then(Value::as_str) {
                        Some(arg) => rendered.push_str(arg),
                        None => rendered.push_str("%s"),
                    }
                    rest = &rest[at + 2..];
                }
                rendered.push_str(rest);
                rendered
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_details_omit_absent_fields() {
        let details = GraphQLDetails {
            queries: Some(vec!["add".to_string(), "echo".to_string()]),
            ..Default::default()
        };
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value, json!({"queries": ["add", "echo"]}));
    }

    #[test]
    fn test_details_variables_explicit_null() {
        let details = GraphQLDetails {
            queries: Some(vec!["add".to_string()]),
            variables: Some(Value::Null),
            ..Default::default()
        };
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value, json!({"queries": ["add"], "variables": null}));
    }

    #[test]
    fn test_record_to_value() {
        let record = LogRecord {
            correlation_label: "reqId".to_string(),
            request_id: Some("req-1".to_string()),
            request: None,
            graphql: GraphQLDetails {
                mutations: Some(vec!["plusOne".to_string()]),
                ..Default::default()
            },
        };
        assert_eq!(
            record.to_value(),
            json!({"reqId": "req-1", "graphql": {"mutations": ["plusOne"]}})
        );
    }

    #[test]
    fn test_record_to_value_custom_label() {
        let record = LogRecord {
            correlation_label: "traceId".to_string(),
            request_id: Some("abc".to_string()),
            request: None,
            graphql: GraphQLDetails::default(),
        };
        let value = record.to_value();
        assert_eq!(value["traceId"], "abc");
        assert!(value.get("reqId").is_none());
    }

    #[test]
    fn test_record_to_value_without_request_id() {
        let record = LogRecord {
            correlation_label: "reqId".to_string(),
            request_id: None,
            request: None,
            graphql: GraphQLDetails::default(),
        };
        let value = record.to_value();
        assert!(value.get("reqId").is_none());
        assert!(value.get("req").is_none());
    }

    #[test]
    fn test_message_text_render() {
        let message = LogMessage::text("hello");
        assert!(message.is_well_formed());
        assert_eq!(message.render(), "hello");
    }

    #[test]
    fn test_message_template_render() {
        let message = LogMessage::template("made by foo%s", [json!("bar")]);
        assert!(message.is_well_formed());
        assert_eq!(message.render(), "made by foobar");
    }

    #[test]
    fn test_message_template_missing_arg_keeps_placeholder() {
        let message = LogMessage::template("a %s b %s", [json!("x")]);
        assert_eq!(message.render(), "a x b %s");
    }

    #[test]
    fn test_message_template_non_string_arg_is_malformed() {
        let message = LogMessage::template("foobar%s", [json!(3)]);
        assert!(!message.is_well_formed());
    }
}
