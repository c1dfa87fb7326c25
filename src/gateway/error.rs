use thiserror::Error;

/// Errors a fetch can fail with before the compatibility shim collapses
/// them.
///
/// Callers of `try_fetch` see these; callers of `fetch` never do.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure (connect, DNS, timeout, protocol)
    #[error("Transport failure: {0}")]
    Transport(String),
    /// Server answered with a non-success status; body is not inspected
    #[error("Server returned status {0}")]
    Status(u16),
    /// Response body was not a JSON array of records
    #[error("Malformed response body: {0}")]
    Parse(String),
}
