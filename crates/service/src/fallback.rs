use tracing::error;

use crate::errors::ServiceError;
use crate::messages::MessageService;

pub const SERVICE_NAME: &str = "HeroService";

/// Build the failure adapter for one call site.
///
/// The returned closure records the error for developers, adds a single
/// `HeroService: <operation> failed: <message>` line to `messages`, and yields
/// `result` so the caller keeps going. Use it with `Result::unwrap_or_else`.
pub fn handle_error<T>(
    messages: &MessageService,
    operation: impl Into<String>,
    result: T,
) -> impl FnOnce(ServiceError) -> T {
    let messages = messages.clone();
    let operation = operation.into();
    move |err| {
        error!(event = "call_failed", %operation, url = %err.url(), error = ?err, "data access call failed");
        messages.add(format!("{SERVICE_NAME}: {operation} failed: {err}"));
        result
    }
}
