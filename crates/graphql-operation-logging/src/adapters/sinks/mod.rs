mod tracing;

pub use self::tracing::TracingSink;
