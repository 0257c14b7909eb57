use tracing::warn;

use crate::trace_ctx;

/// Log a rejected `Authorization` header.
pub fn auth_failed(reason: &str, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_AUTH_FAILED",
        %trace_id,
        path,
        reason,
        "Authentication failure"
    );
}
