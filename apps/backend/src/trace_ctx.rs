//! Task-local trace context for web requests.
//!
//! `RequestTrace` opens the scope for every request; error responses and
//! store-error logging read the id back through [`trace_id`] so that a single
//! id ties the `x-trace-id` header, the error body, and the log lines together.

use tokio::task_local;

task_local! {
    static TRACE_ID: String;
}

/// Placeholder used outside of a request scope (background work, unit tests).
pub const UNKNOWN_TRACE_ID: &str = "unknown";

/// Get the trace_id for the current task.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Run a future within a trace context.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
