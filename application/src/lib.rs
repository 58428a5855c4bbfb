mod service;
mod transfer;

pub use self::{service::*, transfer::*};
