//! Normalization of caught failure values into displayable message/details

use serde::Deserialize;
use serde_json::Value;

/// Message used when a failure has no recognizable shape and the caller
/// supplied no fallback
pub const DEFAULT_FALLBACK_MESSAGE: &str = "An unexpected error occurred";

/// Structured error shape returned by API layers: a human-readable message
/// plus an optional machine payload
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

/// A failure value caught at some boundary, before normalization.
///
/// The variants cover the shapes upstream code actually produces: real error
/// types, bare strings, structured API errors, raw JSON bodies, and values
/// with no recognizable shape at all.
pub enum CaughtFailure {
    /// A native error type; message from `Display`, details from the debug
    /// representation and the `source()` chain
    Failure(Box<dyn std::error::Error + Send + Sync>),
    /// A bare message string
    Text(String),
    /// A structured API error
    Api(ApiError),
    /// A raw JSON value, e.g. an unparsed response body
    Json(Value),
    /// Anything else; normalizes to the fallback message
    Opaque,
}

impl CaughtFailure {
    /// Wrap a concrete error type
    pub fn from_error(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        CaughtFailure::Failure(Box::new(err))
    }
}

impl From<String> for CaughtFailure {
    fn from(text: String) -> Self {
        CaughtFailure::Text(text)
    }
}

impl From<&str> for CaughtFailure {
    fn from(text: &str) -> Self {
        CaughtFailure::Text(text.to_string())
    }
}

impl From<ApiError> for CaughtFailure {
    fn from(api: ApiError) -> Self {
        CaughtFailure::Api(api)
    }
}

impl From<Value> for CaughtFailure {
    fn from(value: Value) -> Self {
        CaughtFailure::Json(value)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CaughtFailure {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CaughtFailure::Failure(err)
    }
}

/// Outcome of the normalization chain
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub message: String,
    pub details: Option<String>,
}

/// Normalize a caught failure into a message/details pair.
///
/// The priority order is fixed and determines what the end user sees for
/// every class of failure:
///
/// 1. native errors: `Display` as message, debug + cause chain as details
/// 2. bare strings: used verbatim, no details
/// 3. structured API errors (including JSON objects with a string `message`
///    field): their message, with any `data` payload serialized as details
/// 4. everything else: the caller's fallback message
///
/// Never panics; a failed payload serialization degrades to the debug
/// representation of the payload.
pub fn normalize(failure: CaughtFailure, fallback: Option<&str>) -> Normalized {
    let fallback_message =
        || fallback.unwrap_or(DEFAULT_FALLBACK_MESSAGE).to_string();

    match failure {
        CaughtFailure::Failure(err) => Normalized {
            message: err.to_string(),
            details: Some(error_trace(err.as_ref())),
        },
        CaughtFailure::Text(text) => Normalized {
            message: text,
            details: None,
        },
        CaughtFailure::Api(api) => Normalized {
            message: api.message,
            details: api.data.as_ref().map(serialize_payload),
        },
        CaughtFailure::Json(value) => match structured_message(&value) {
            Some((message, data)) => Normalized {
                message,
                details: data.as_ref().map(serialize_payload),
            },
            None => Normalized {
                message: fallback_message(),
                details: None,
            },
        },
        CaughtFailure::Opaque => Normalized {
            message: fallback_message(),
            details: None,
        },
    }
}

/// The debug representation plus the `source()` chain, the closest analog
/// to a stack trace
fn error_trace(err: &(dyn std::error::Error + 'static)) -> String {
    let mut trace = format!("{:?}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        trace.push_str(&format!("\ncaused by: {}", cause));
        source = cause.source();
    }
    trace
}

fn serialize_payload(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
}

/// Extract (message, data) from a JSON object exposing a string `message`
/// field, the structured-API-error shape
fn structured_message(value: &Value) -> Option<(String, Option<Value>)> {
    let object = value.as_object()?;
    let message = object.get("message")?.as_str()?.to_string();
    Some((message, object.get("data").cloned()))
}
