use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct DateOfBirth(Date);

impl DateOfBirth {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }

    /// Whole years lived at `today`; one less while this year's birthday is still ahead.
    pub fn age_at(&self, today: Date) -> i32 {
        let age = today.year() - self.0.year();
        let birthday_passed =
            (u8::from(today.month()), today.day()) >= (u8::from(self.0.month()), self.0.day());
        if birthday_passed {
            age
        } else {
            age - 1
        }
    }
}
