mod due;

pub use self::due::*;
use crate::entity::{CustomerId, VideoTitle};
use destructure::Destructure;
use vodca::References;

/// Issued by [`Store::rent_video`](crate::entity::Store::rent_video) only.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Rental {
    video_title: VideoTitle,
    customer_id: CustomerId,
    due_date: DueDate,
}

impl Rental {
    pub(crate) fn new(video_title: VideoTitle, customer_id: CustomerId, due_date: DueDate) -> Self {
        Self {
            video_title,
            customer_id,
            due_date,
        }
    }
}

#[cfg(test)]
mod test {
    use time::macros::{date, datetime};

    use crate::entity::DueDate;

    #[test]
    fn overdue_only_after_due_instant() {
        let due = DueDate::new(datetime!(2024-09-15 10:30 UTC));
        assert!(!due.is_overdue_on(date!(2024 - 09 - 01)));
        assert!(!due.is_overdue_on(date!(2024 - 09 - 15)));
        assert!(due.is_overdue_on(date!(2024 - 09 - 16)));

        let midnight = DueDate::new(datetime!(2024-09-15 0:00 UTC));
        assert!(!midnight.is_overdue_on(date!(2024 - 09 - 15)));
        assert!(midnight.is_overdue_on(date!(2024 - 09 - 16)));
    }
}
