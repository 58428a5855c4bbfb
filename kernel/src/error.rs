use std::fmt::{Debug, Display};

use error_stack::{Context, Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// Input does not have the expected shape, e.g. an unparsable date.
    TypeValidation,
    /// Input is well-formed but outside the allowed domain or breaks a rental rule.
    ValueValidation,
    Internal,
}

impl KernelError {
    pub(crate) fn with_reason<A>(self, reason: A) -> Report<Self>
    where
        A: Display + Debug + Send + Sync + 'static,
    {
        Report::new(self).attach_printable(reason)
    }
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::TypeValidation => write!(f, "Type validation error"),
            KernelError::ValueValidation => write!(f, "Value validation error"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
