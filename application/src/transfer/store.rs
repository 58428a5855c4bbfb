use kernel::prelude::entity::Store;
use kernel::KernelError;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::transfer::{CreateVideoDto, VideoDto};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStoreDto {
    #[serde(default)]
    pub vending_machine: bool,
    pub videos: Vec<CreateVideoDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreDto {
    pub kind: String,
    pub videos: Vec<VideoDto>,
    pub available: Vec<String>,
}

impl StoreDto {
    pub fn from_entity(store: &Store, today: Date) -> error_stack::Result<Self, KernelError> {
        let mut available = Vec::new();
        for video in store.videos() {
            if store.is_available(video.title().as_str())? {
                available.push(video.title().to_string());
            }
        }
        Ok(Self {
            kind: store.kind().to_string(),
            videos: store
                .videos()
                .iter()
                .cloned()
                .map(|video| VideoDto::from_entity(video, today))
                .collect(),
            available,
        })
    }
}
