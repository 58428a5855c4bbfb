use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::config::DependOnRentalTerms;
use kernel::prelude::entity::{Store, StoreKind, Video};
use kernel::KernelError;

use crate::transfer::{CreateStoreDto, StoreDto};

pub trait StoreService: 'static + Sync + Send + DependOnClock + DependOnRentalTerms {
    #[tracing::instrument(skip(self, dto), fields(videos = dto.videos.len()))]
    fn open_store(&self, dto: CreateStoreDto) -> error_stack::Result<Store, KernelError> {
        let today = self.clock().today();
        let kind = if dto.vending_machine {
            StoreKind::VendingMachine
        } else {
            StoreKind::Regular
        };
        let videos = dto
            .videos
            .into_iter()
            .map(|video| video.into_video(today))
            .collect::<error_stack::Result<Vec<Video>, KernelError>>()?;

        let store = Store::with_terms(kind, videos, self.rental_terms().clone())?;
        tracing::debug!(%kind, "Store opened");
        Ok(store)
    }

    fn describe_store(&self, store: &Store) -> error_stack::Result<StoreDto, KernelError> {
        StoreDto::from_entity(store, self.clock().today())
    }
}

impl<T> StoreService for T where T: DependOnClock + DependOnRentalTerms {}
