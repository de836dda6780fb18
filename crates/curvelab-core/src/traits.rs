use crate::error::Result;

/// Check that a value satisfies its input requirements before it is used.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
