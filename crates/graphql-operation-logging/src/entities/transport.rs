use serde::Serialize;
use std::collections::BTreeMap;

/// Serializable snapshot of the inbound transport request.
///
/// Field names follow the default pino request serializer so records blend
/// into existing HTTP request logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportRequest {
    pub method: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_address: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

impl TransportRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            hostname: None,
            remote_address: None,
            headers: BTreeMap::new(),
        }
    }

    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn with_remote_address(mut self, addr: impl Into<String>) -> Self {
        self.remote_address = Some(addr.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Case-insensitive header lookup (header names are stored lowercase)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_request_new() {
        let req = TransportRequest::new("POST", "/graphql");
        assert_eq!(req.method, "POST");
        assert_eq!(req.url, "/graphql");
        assert!(req.hostname.is_none());
    }

    #[test]
    fn test_transport_request_serializes_camel_case() {
        let req = TransportRequest::new("POST", "/graphql")
            .with_hostname("localhost:80")
            .with_remote_address("127.0.0.1");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "method": "POST",
                "url": "/graphql",
                "hostname": "localhost:80",
                "remoteAddress": "127.0.0.1"
            })
        );
    }

    #[test]
    fn test_transport_request_header_lookup() {
        let req = TransportRequest::new("POST", "/graphql").with_header("x-debug", "true");
        assert_eq!(req.header("X-Debug"), Some("true"));
        assert_eq!(req.header("x-missing"), None);
    }
}
