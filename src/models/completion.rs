use serde_json::Value;
use thiserror::Error;

pub const COMPLETION_FIELD: &str = "completion_percentage";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionBodyError {
    #[error("\"completion_percentage\" field must be included in the body")]
    Missing,

    #[error("\"completion_percentage\" field must be a proper integer")]
    NotAnInteger,
}

// No 0-100 check on this path.
pub fn extract_completion_percentage(body: &Value) -> Result<u16, CompletionBodyError> {
    let field = body
        .as_object()
        .and_then(|object| object.get(COMPLETION_FIELD))
        .ok_or(CompletionBodyError::Missing)?;

    field
        .as_u64()
        .and_then(|value| u16::try_from(value).ok())
        .ok_or(CompletionBodyError::NotAnInteger)
}
