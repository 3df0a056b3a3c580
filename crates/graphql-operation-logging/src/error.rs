use thiserror::Error;

/// Errors that can occur while normalizing the logging configuration
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("unknown log level: {0}")]
    UnknownLevel(String),
}
