mod customer;
mod rental;
mod store;
mod video;

pub use self::{customer::*, rental::*, store::*, video::*};
