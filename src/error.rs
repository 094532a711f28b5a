use thiserror::Error;

/// Errors surfaced through the [`Tool`](crate::Tool) call interface.
///
/// Only host-contract violations (arguments that do not match the declared
/// schema) are reported through the error channel. Upstream HTTP failures,
/// transport errors, and missing configuration are returned to the model as
/// descriptive strings in the `Ok` value so the conversation can recover.
#[derive(Debug, Error)]
pub enum ValyuError {
    /// Tool arguments did not match the declared parameter schema.
    #[error("Tool error: {0}")]
    Tool(String),
}
