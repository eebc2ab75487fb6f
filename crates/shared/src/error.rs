use thiserror::Error;

/// Client-side form problems. Display strings are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),
    #[error("order id must be a whole number, got '{0}'")]
    InvalidOrderId(String),
}
