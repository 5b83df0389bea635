use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid quantity '{value}': {reason}")]
    InvalidQuantity { value: String, reason: &'static str },

    #[error("unknown resource kind: {0}")]
    UnknownResourceKind(String),

    #[error("unknown restart policy: {0}")]
    UnknownRestartPolicy(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
