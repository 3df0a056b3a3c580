//! Simple example demonstrating basic usage of graphql-operation-logging
//!
//! This example shows how to:
//! - Register the extension on an async-graphql schema
//! - Build a per-request scope from the HTTP parts and attach it
//! - Watch the structured records flow through `tracing`

use std::net::SocketAddr;
use std::sync::Arc;

use async_graphql::{BatchRequest, EmptyMutation, EmptySubscription, Object, Schema};
use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use graphql_operation_logging::prelude::*;

struct Query;

#[Object]
impl Query {
    async fn echo(&self, msg: String) -> String {
        msg.repeat(2)
    }

    async fn add(&self, x: i64, y: i64) -> i64 {
        x + y
    }
}

type AppSchema = Schema<Query, EmptyMutation, EmptySubscription>;

async fn graphql_handler(
    State(schema): State<AppSchema>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Json<Value> {
    let mut batch: BatchRequest = match serde_json::from_value(payload) {
        Ok(batch) => batch,
        Err(err) => return Json(json!({"errors": [{"message": err.to_string()}]})),
    };

    let mut transport = TransportRequest::new(method.as_str(), uri.to_string());
    for (name, value) in headers.iter() {
        if let Ok(value) = value.to_str() {
            transport = transport.with_header(name.as_str(), value);
        }
    }

    let scope = Arc::new(
        RequestScope::new(request_body_from_batch(&batch))
            .with_transport(transport)
            .with_request_id("req-1"),
    );
    attach_scope(&mut batch, scope);

    let response = schema.execute_batch(batch).await;
    Json(serde_json::to_value(&response).unwrap_or(Value::Null))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Default sink: records are emitted as tracing events
    let schema = Schema::build(Query, EmptyMutation, EmptySubscription)
        .extension(OperationLogging::new(
            LoggingOptions::new()
                .with_prepend_alias(true)
                .with_log_variables(true)
                .with_log_message(|_: &RequestScope| Some(LogMessage::text("operation executed"))),
        ))
        .finish();

    let app = Router::new()
        .route("/graphql", post(graphql_handler))
        .with_state(schema);

    let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    println!("GraphQL endpoint on http://{addr}/graphql");

    tokio::spawn(async move {
        // Give the server a moment, then fire a demo request
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        let response = reqwest::Client::new()
            .post(format!("http://{addr}/graphql"))
            .json(&json!({
                "query": "query demo($msg: String!) { four: add(x: 2, y: 2) echo(msg: $msg) }",
                "variables": {"msg": "hello"}
            }))
            .send()
            .await
            .unwrap();
        println!("Response: {:?}", response.text().await);
    });

    axum::serve(listener, app).await.unwrap();
}
