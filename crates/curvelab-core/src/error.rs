use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// The caller violated an input requirement (point count, sample range, finiteness).
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// A linear system could not be solved or produced non-finite values.
    #[error("Numerical failure: {0}")]
    Numerical(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CurveError {
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }

    pub fn is_numerical(&self) -> bool {
        matches!(self, Self::Numerical(_))
    }
}

pub type Result<T> = std::result::Result<T, CurveError>;
