use time::{Date, OffsetDateTime};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct DueDate(OffsetDateTime);

impl DueDate {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }

    /// A return dated `returned_on` counts from midnight UTC of that day.
    pub fn is_overdue_on(&self, returned_on: Date) -> bool {
        returned_on.midnight().assume_utc() > self.0
    }
}
