mod kind;
mod terms;

pub use self::{kind::*, terms::*};
use crate::entity::{parse_date, Customer, DueDate, Pence, Rental, Video, VideoTitle};
use crate::KernelError;
use std::collections::HashMap;
use time::OffsetDateTime;
use vodca::References;

/// Inventory manager: owns the catalog and knows which titles are out on rent.
#[derive(Debug, Clone, Eq, PartialEq, References)]
pub struct Store {
    kind: StoreKind,
    videos: Vec<Video>,
    availability: HashMap<VideoTitle, bool>,
    terms: RentalTerms,
}

impl Store {
    pub fn new(videos: Vec<Video>) -> error_stack::Result<Self, KernelError> {
        Self::with_terms(StoreKind::Regular, videos, RentalTerms::default())
    }

    pub fn vending_machine(videos: Vec<Video>) -> error_stack::Result<Self, KernelError> {
        Self::with_terms(StoreKind::VendingMachine, videos, RentalTerms::default())
    }

    pub fn with_terms(
        kind: StoreKind,
        videos: Vec<Video>,
        terms: RentalTerms,
    ) -> error_stack::Result<Self, KernelError> {
        if videos.is_empty() {
            return Err(KernelError::ValueValidation
                .with_reason("A video store must carry at least some videos"));
        }
        if videos.len() > kind.capacity() {
            return Err(KernelError::ValueValidation.with_reason(format!(
                "A video store can't carry more than {} videos",
                kind.capacity()
            )));
        }

        let mut availability = HashMap::with_capacity(videos.len());
        for video in &videos {
            if availability.insert(video.title().clone(), true).is_some() {
                return Err(KernelError::ValueValidation
                    .with_reason(format!("`{}` is stocked more than once", video.title())));
            }
        }

        Ok(Self {
            kind,
            videos,
            availability,
            terms,
        })
    }

    pub fn find_video_by_title(&self, title: &str) -> error_stack::Result<&Video, KernelError> {
        self.videos
            .iter()
            .find(|video| video.title().as_str() == title)
            .ok_or_else(|| non_existent(title))
    }

    /// Access to a stocked copy, e.g. so the renter can watch or rewind it.
    pub fn find_video_by_title_mut(
        &mut self,
        title: &str,
    ) -> error_stack::Result<&mut Video, KernelError> {
        self.videos
            .iter_mut()
            .find(|video| video.title().as_str() == title)
            .ok_or_else(|| non_existent(title))
    }

    pub fn is_available(&self, title: &str) -> error_stack::Result<bool, KernelError> {
        self.availability
            .get(title)
            .copied()
            .ok_or_else(|| non_existent(title))
    }

    /// Lends `title` to `customer`, due back one loan period after `now`.
    ///
    /// A title that is already out is lent again without error, leaving the availability map
    /// as it was.
    pub fn rent_video(
        &mut self,
        title: &str,
        customer: &Customer,
        now: OffsetDateTime,
    ) -> error_stack::Result<Rental, KernelError> {
        if customer.outstanding_fine() > self.terms.fine_limit() {
            return Err(KernelError::ValueValidation
                .with_reason("Cannot rent videos - outstanding fines too high!"));
        }
        let video_title = self.find_video_by_title(title)?.title().clone();
        let due_date = now
            .checked_add(self.terms.loan_period())
            .map(DueDate::new)
            .ok_or_else(|| {
                KernelError::ValueValidation
                    .with_reason(format!("Due date of a rental starting {now} is out of range"))
            })?;

        match self.availability.get_mut(title) {
            Some(available) if *available => {
                *available = false;
                tracing::debug!(title = %video_title, "Video rented");
            }
            _ => {
                tracing::warn!(
                    title = %video_title,
                    customer = %customer.id().as_ref(),
                    "Renting a video that is already out"
                );
            }
        }

        Ok(Rental::new(video_title, customer.id().clone(), due_date))
    }

    /// Takes a copy back on `return_date` (`dd/mm/yyyy`) and returns the fine charged.
    ///
    /// Regular stores refuse unrewound tapes and charge late returns. Vending machines take
    /// everything back for free without looking at the date.
    pub fn return_video(
        &mut self,
        rental: &Rental,
        customer: &mut Customer,
        return_date: &str,
    ) -> error_stack::Result<Pence, KernelError> {
        if rental.customer_id() != customer.id() {
            return Err(KernelError::ValueValidation
                .with_reason("Rental belongs to another customer"));
        }
        let video = self.find_video_by_title(rental.video_title().as_str())?;

        let fine = if self.kind.enforces_return_rules() {
            if !video.is_rewound() {
                return Err(KernelError::ValueValidation
                    .with_reason("Rewind the video before returning it"));
            }
            let returned_on = parse_date(return_date)?;
            if !rental.due_date().is_overdue_on(returned_on) {
                Pence::ZERO
            } else if video.year().is_released_in(returned_on.year()) {
                *self.terms.new_release_late_fee()
            } else {
                *self.terms.late_fee()
            }
        } else {
            Pence::ZERO
        };

        if fine > Pence::ZERO {
            customer.charge_fine(fine)?;
            tracing::debug!(title = %rental.video_title(), %fine, "Late return charged");
        }
        self.availability.insert(rental.video_title().clone(), true);
        Ok(fine)
    }
}

fn non_existent(title: &str) -> error_stack::Report<KernelError> {
    KernelError::ValueValidation.with_reason(format!("Non-existent title `{title}`"))
}
