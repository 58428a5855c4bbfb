use vodca::{AsRefln, Fromln};

pub const MIN_RUNTIME: i32 = 10;
pub const MAX_RUNTIME: i32 = 1440;
const LONG_RUNTIME: i32 = 240;

/// Running time in minutes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct Runtime(i32);

impl Runtime {
    pub fn new(minutes: impl Into<i32>) -> Self {
        Self(minutes.into())
    }

    pub fn is_long(&self) -> bool {
        self.0 > LONG_RUNTIME
    }
}
