mod date;
mod money;

pub use self::{date::*, money::*};
