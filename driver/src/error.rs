use std::num::ParseIntError;

use error_stack::{Report, ResultExt};
use kernel::KernelError;
use tracing_subscriber::util::TryInitError;

pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, ParseIntError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.change_context(KernelError::Internal)
    }
}

impl<T> ConvertError for Result<T, TryInitError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            Report::new(error)
                .change_context(KernelError::Internal)
                .attach_printable("A global tracing subscriber is already installed")
        })
    }
}
