use std::str::FromStr;
use std::sync::Arc;

use crate::entities::{GraphQLRequest, LogMessage, RequestScope};
use crate::error::LoggingError;

/// Severity at which records are emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Trace => write!(f, "trace"),
            Severity::Debug => write!(f, "debug"),
            Severity::Info => write!(f, "info"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl FromStr for Severity {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            other => Err(LoggingError::UnknownLevel(other.to_string())),
        }
    }
}

/// Predicate deciding whether the raw query string of a request is logged.
///
/// Receives the request scope and, for detailed batch logging, the batch
/// entry resolved for the current execution.
pub type BodyPredicate = Arc<dyn Fn(&RequestScope, Option<&GraphQLRequest>) -> bool + Send + Sync>;

/// Hook producing an optional free-text message for each record
pub type MessageHook = Arc<dyn Fn(&RequestScope) -> Option<LogMessage> + Send + Sync>;

/// How the raw query string is projected into the record
#[derive(Clone, Default)]
pub enum BodyLogging {
    #[default]
    Disabled,
    Enabled,
    /// Projects only when the predicate returns exactly `true`; a panicking
    /// predicate is contained and treated as `false`
    Predicate(BodyPredicate),
}

impl BodyLogging {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&RequestScope, Option<&GraphQLRequest>) -> bool + Send + Sync + 'static,
    {
        BodyLogging::Predicate(Arc::new(f))
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, BodyLogging::Disabled)
    }
}

impl std::fmt::Debug for BodyLogging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyLogging::Disabled => f.write_str("Disabled"),
            BodyLogging::Enabled => f.write_str("Enabled"),
            BodyLogging::Predicate(_) => f.debug_tuple("Predicate").field(&"<fn>").finish(),
        }
    }
}

impl From<bool> for BodyLogging {
    fn from(enabled: bool) -> Self {
        if enabled {
            BodyLogging::Enabled
        } else {
            BodyLogging::Disabled
        }
    }
}

/// Immutable configuration snapshot, resolved once at registration time and
/// shared read-only across all subsequent executions
#[derive(Clone, Default)]
pub struct LoggingOptions {
    pub level: Severity,
    pub prepend_alias: bool,
    pub log_body: BodyLogging,
    pub log_variables: bool,
    pub log_request: bool,
    pub log_message: Option<MessageHook>,
}

impl LoggingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    pub fn with_prepend_alias(mut self, prepend: bool) -> Self {
        self.prepend_alias = prepend;
        self
    }

    pub fn with_log_body(mut self, enabled: bool) -> Self {
        self.log_body = enabled.into();
        self
    }

    pub fn with_log_body_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&RequestScope, Option<&GraphQLRequest>) -> bool + Send + Sync + 'static,
    {
        self.log_body = BodyLogging::predicate(f);
        self
    }

    pub fn with_log_variables(mut self, enabled: bool) -> Self {
        self.log_variables = enabled;
        self
    }

    pub fn with_log_request(mut self, enabled: bool) -> Self {
        self.log_request = enabled;
        self
    }

    pub fn with_log_message<F>(mut self, f: F) -> Self
    where
        F: Fn(&RequestScope) -> Option<LogMessage> + Send + Sync + 'static,
    {
        self.log_message = Some(Arc::new(f));
        self
    }

    /// True when batch entries must be re-associated with executions
    pub(crate) fn wants_detail(&self) -> bool {
        self.log_variables || self.log_body.is_enabled()
    }
}

impl std::fmt::Debug for LoggingOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingOptions")
            .field("level", &self.level)
            .field("prepend_alias", &self.prepend_alias)
            .field("log_body", &self.log_body)
            .field("log_variables", &self.log_variables)
            .field("log_request", &self.log_request)
            .field("log_message", &self.log_message.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
