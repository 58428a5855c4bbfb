use std::fmt::{Display, Formatter};

use time::Date;

use crate::entity::{Pence, ReleaseYear, Runtime};

const BASE_PRICE: i64 = 500;
const NEW_RELEASE_PRICE: i64 = 1000;
const DVD_PRICE: i64 = 1200;

/// Media format of a [`Video`](crate::entity::Video). Pricing and watch rules hang off this.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum VideoKind {
    #[default]
    Standard,
    Dvd,
}

impl VideoKind {
    pub(super) fn rental_price(&self, year: &ReleaseYear, runtime: &Runtime, today: Date) -> Pence {
        match self {
            VideoKind::Dvd => Pence::new(DVD_PRICE),
            VideoKind::Standard => {
                let base = if year.is_released_in(today.year()) {
                    NEW_RELEASE_PRICE
                } else {
                    BASE_PRICE
                };
                let factor = if runtime.is_long() { 2 } else { 1 };
                Pence::new(base * factor)
            }
        }
    }

    /// Only tapes have to be rewound before they can be watched again.
    pub(super) fn needs_rewind(&self) -> bool {
        matches!(self, VideoKind::Standard)
    }
}

impl Display for VideoKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoKind::Standard => write!(f, "video"),
            VideoKind::Dvd => write!(f, "dvd"),
        }
    }
}
