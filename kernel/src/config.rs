use crate::entity::RentalTerms;

pub trait DependOnRentalTerms: 'static + Sync + Send {
    fn rental_terms(&self) -> &RentalTerms;
}
