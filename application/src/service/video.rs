use kernel::interface::clock::{Clock, DependOnClock};
use kernel::prelude::entity::Video;
use kernel::KernelError;

use crate::transfer::{CreateVideoDto, VideoDto};

pub trait VideoService: 'static + Sync + Send + DependOnClock {
    #[tracing::instrument(skip(self))]
    fn create_video(&self, dto: CreateVideoDto) -> error_stack::Result<Video, KernelError> {
        dto.into_video(self.clock().today())
    }

    fn describe_video(&self, video: &Video) -> VideoDto {
        VideoDto::from_entity(video.clone(), self.clock().today())
    }
}

impl<T> VideoService for T where T: DependOnClock {}
