//! Converts JSON schema validation failures into catalog error responses.
//!
//! The registry's VALIDATION template carries one metadata entry per schema
//! error plus a joined details line, so a client can recover the individual
//! issues without parsing the message text.
#![warn(missing_docs)]

use grpc_status_registry::{Error, ErrorRegistry, ErrorResponse};
use jsonschema::{ValidationError, Validator};
use serde_json::Value;
use tracing::debug;

/// Check `instance` against `validator`.
///
/// Returns `Ok(None)` when the document conforms. Otherwise resolves the
/// registry's VALIDATION response with one metadata entry per schema error,
/// in document order.
pub fn conformance_failure(
    registry: &ErrorRegistry,
    validator: &Validator,
    instance: &Value,
) -> Result<Option<ErrorResponse>, Error> {
    if validator.is_valid(instance) {
        return Ok(None);
    }
    // Walking the errors is much slower than the validity check above.
    let messages: Vec<String> = validator.iter_errors(instance).map(format_error).collect();
    debug!(errors = messages.len(), "document failed schema validation");
    registry.validation_failure(messages).map(Some)
}

/// Convert an already-collected sequence of schema errors into the
/// registry's VALIDATION response.
pub fn response_for<'a, I>(registry: &ErrorRegistry, errors: I) -> Result<ErrorResponse, Error>
where
    I: IntoIterator<Item = ValidationError<'a>>,
{
    registry.validation_failure(errors.into_iter().map(format_error))
}

fn format_error(err: ValidationError<'_>) -> String {
    if err.instance_path.as_str().is_empty() {
        err.to_string()
    } else {
        format!("'{err}' at {}", err.instance_path)
    }
}
