//! Product information, effect/source listings and thumbnails.

use tokio_util::sync::CancellationToken;

use resolume_types::{Effects, ProductInfo, Sources};

use super::{Call, ResolumeClient};
use crate::catalog::{Address, EntityKind, Operation, Scope};
use crate::codec::RequestBody;
use crate::error::{Error, Result};

const THUMBNAIL_FILE_NAME: &str = "thumbnail";

impl ResolumeClient {
    /// Retrieve product name and version.
    pub async fn product(&self, cancel: &CancellationToken) -> Result<ProductInfo> {
        self.fetch(Call::new(Scope::Product, Operation::Get), cancel)
            .await
    }

    /// Retrieve every available effect.
    pub async fn effects(&self, cancel: &CancellationToken) -> Result<Effects> {
        self.fetch(Call::new(Scope::Effects, Operation::Get), cancel)
            .await
    }

    /// Retrieve every available source.
    pub async fn sources(&self, cancel: &CancellationToken) -> Result<Sources> {
        self.fetch(Call::new(Scope::Sources, Operation::Get), cancel)
            .await
    }

    /// Image shown for clips without a thumbnail of their own.
    pub async fn dummy_thumbnail(&self, cancel: &CancellationToken) -> Result<Vec<u8>> {
        self.fetch_bytes(
            Call::new(Scope::Composition, Operation::DummyThumbnail),
            cancel,
        )
        .await
    }

    pub async fn clip_thumbnail(
        &self,
        address: Address,
        cancel: &CancellationToken,
    ) -> Result<Vec<u8>> {
        self.fetch_bytes(
            Call::entity(EntityKind::Clip, address, Operation::Thumbnail),
            cancel,
        )
        .await
    }

    /// Upload a custom thumbnail image for a clip.
    pub async fn set_clip_thumbnail(
        &self,
        address: Address,
        image: Vec<u8>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        if image.is_empty() {
            return Err(Error::InvalidArgument(
                "thumbnail image must not be empty".to_string(),
            ));
        }
        let call = Call::entity(EntityKind::Clip, address, Operation::SetThumbnail)
            .body(RequestBody::upload(THUMBNAIL_FILE_NAME, image));
        self.run(call, cancel).await
    }

    /// Restore the default thumbnail of a clip.
    pub async fn reset_clip_thumbnail(
        &self,
        address: Address,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.run(
            Call::entity(EntityKind::Clip, address, Operation::ResetThumbnail),
            cancel,
        )
        .await
    }
}
