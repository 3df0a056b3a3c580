use std::panic::{catch_unwind, AssertUnwindSafe};

use serde_json::Value;

use crate::entities::{GraphQLRequest, RequestScope};
use crate::options::BodyLogging;

/// Conditionally project the resolved request's raw query string.
///
/// A user predicate runs inside a containment wrapper: only a literal `true`
/// projects, and a panic is reported once at debug severity and treated as
/// `false`. Nothing here may affect the surrounding request.
pub fn project_body(
    mode: &BodyLogging,
    scope: &RequestScope,
    entry: Option<&GraphQLRequest>,
) -> Option<String> {
    let wanted = match mode {
        BodyLogging::Disabled => false,
        BodyLogging::Enabled => true,
        BodyLogging::Predicate(predicate) => {
            catch_unwind(AssertUnwindSafe(|| predicate(scope, entry))).unwrap_or_else(|_| {
                tracing::debug!(
                    target: "graphql_operation",
                    "logBody predicate panicked; skipping body projection"
                );
                false
            })
        }
    };

    if wanted {
        entry.map(|request| request.query.clone())
    } else {
        None
    }
}

/// Project the resolved request's variables.
///
/// An entry without variables (or no resolved entry at all) yields an
/// explicit `null`, distinguishing "requested, none present" from the
/// omitted not-requested case.
pub fn project_variables(entry: Option<&GraphQLRequest>) -> Value {
    entry
        .and_then(|request| request.variables.clone())
        .unwrap_or(Value::Null)
}
