use std::sync::Arc;

use kernel::interface::clock::{Clock, DependOnClock};
use kernel::interface::config::DependOnRentalTerms;
use kernel::prelude::entity::RentalTerms;
use kernel::KernelError;

use crate::clock::SystemClock;
use crate::config::load_rental_terms;

/// Wires the clock and rental terms together; every application service is available on it.
pub struct AppModule<C: Clock = SystemClock>(Arc<Handler<C>>);

impl AppModule {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> AppModule<C> {
    pub fn with_clock(clock: C) -> error_stack::Result<Self, KernelError> {
        Ok(Self::with_parts(clock, load_rental_terms()?))
    }

    pub fn with_parts(clock: C, rental_terms: RentalTerms) -> Self {
        Self(Arc::new(Handler {
            clock,
            rental_terms,
        }))
    }
}

impl<C: Clock> Clone for AppModule<C> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

struct Handler<C> {
    clock: C,
    rental_terms: RentalTerms,
}

impl<C: Clock> DependOnClock for AppModule<C> {
    type Clock = C;
    fn clock(&self) -> &Self::Clock {
        &self.0.clock
    }
}

impl<C: Clock> DependOnRentalTerms for AppModule<C> {
    fn rental_terms(&self) -> &RentalTerms {
        &self.0.rental_terms
    }
}
