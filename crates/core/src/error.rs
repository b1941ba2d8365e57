use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// The grid is empty or its rows differ in length.
    #[error("invalid canvas: {reason}")]
    InvalidCanvas { reason: String },
}

impl CanvasError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        CanvasError::InvalidCanvas {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CanvasError>;
