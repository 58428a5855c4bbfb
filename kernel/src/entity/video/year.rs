use vodca::{AsRefln, Fromln};

pub const EARLIEST_RELEASE_YEAR: i32 = 1900;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Fromln, AsRefln)]
pub struct ReleaseYear(i32);

impl ReleaseYear {
    pub fn new(year: impl Into<i32>) -> Self {
        Self(year.into())
    }

    pub fn is_released_in(&self, year: i32) -> bool {
        self.0 == year
    }
}
