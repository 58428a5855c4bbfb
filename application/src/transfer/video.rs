use error_stack::ResultExt;
use kernel::prelude::entity::{DestructVideo, Video, VideoKind};
use kernel::KernelError;
use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateVideoDto {
    pub title: String,
    pub year: i64,
    pub runtime: i64,
    #[serde(default)]
    pub dvd: bool,
}

impl CreateVideoDto {
    pub(crate) fn into_video(self, today: Date) -> error_stack::Result<Video, KernelError> {
        let year = i32::try_from(self.year)
            .change_context(KernelError::TypeValidation)
            .attach_printable_lazy(|| format!("Year {} is not a 32-bit integer", self.year))?;
        let runtime = i32::try_from(self.runtime)
            .change_context(KernelError::TypeValidation)
            .attach_printable_lazy(|| format!("Runtime {} is not a 32-bit integer", self.runtime))?;
        let kind = if self.dvd {
            VideoKind::Dvd
        } else {
            VideoKind::Standard
        };
        Video::with_kind(kind, self.title, year, runtime, today)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoDto {
    pub title: String,
    pub display_title: String,
    pub year: i32,
    pub runtime: i32,
    pub kind: String,
    pub rewound: bool,
    pub price: i64,
    pub display_price: String,
}

impl VideoDto {
    pub fn from_entity(video: Video, today: Date) -> Self {
        let display_title = video.display_title();
        let price = video.rental_price(today);
        let DestructVideo {
            title,
            year,
            runtime,
            kind,
            rewound,
        } = video.into_destruct();
        Self {
            title: title.into(),
            display_title,
            year: year.into(),
            runtime: runtime.into(),
            kind: kind.to_string(),
            rewound: rewound.into(),
            price: price.into(),
            display_price: price.to_string(),
        }
    }
}
