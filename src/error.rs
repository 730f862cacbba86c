use thiserror::Error;

/// Errors raised at the few fallible edges of the crate.
///
/// Per-frame operations never fail; bad parameters are clamped instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShakeError {
    #[error("unknown shake kind `{0}`")]
    UnknownKind(String),
    #[error("invalid damping curve: {0}")]
    InvalidCurve(&'static str),
}

pub type Result<T> = std::result::Result<T, ShakeError>;
