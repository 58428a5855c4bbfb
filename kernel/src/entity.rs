mod common;
mod customer;
mod rental;
mod store;
mod video;

pub use self::{common::*, customer::*, rental::*, store::*, video::*};
