//! Operations on decks, layers, layer groups, columns and clips.
//!
//! One method per operation, parameterized by [`EntityKind`] and
//! [`Address`]. The catalog decides which combinations exist; anything else
//! fails with [`Error::InvalidArgument`] before a request is made.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use resolume_types::{Clip, Column, Deck, Layer, LayerGroup, ResetParameter};

use super::{Call, ResolumeClient};
use crate::catalog::{Address, EntityKind, Operation, Scope};
use crate::codec::RequestBody;
use crate::error::{Error, Result};

/// A composition entity that can be read and replaced as a whole.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    const KIND: EntityKind;
}

impl Entity for Deck {
    const KIND: EntityKind = EntityKind::Deck;
}

impl Entity for Layer {
    const KIND: EntityKind = EntityKind::Layer;
}

impl Entity for LayerGroup {
    const KIND: EntityKind = EntityKind::LayerGroup;
}

impl Entity for Column {
    const KIND: EntityKind = EntityKind::Column;
}

impl Entity for Clip {
    const KIND: EntityKind = EntityKind::Clip;
}

impl ResolumeClient {
    /// Retrieve an entity.
    ///
    /// ```no_run
    /// # async fn demo(client: resolume_client::ResolumeClient) -> resolume_client::Result<()> {
    /// use resolume_client::{Address, CancellationToken};
    /// use resolume_client::types::Layer;
    ///
    /// let cancel = CancellationToken::new();
    /// let layer: Layer = client.get(Address::Selected, &cancel).await?;
    /// println!("{} clips", layer.clips.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get<E: Entity>(&self, address: Address, cancel: &CancellationToken) -> Result<E> {
        self.fetch(Call::entity(E::KIND, address, Operation::Get), cancel)
            .await
    }

    /// Update an entity and/or its children. Only present fields are applied.
    pub async fn replace<E: Entity>(
        &self,
        address: Address,
        entity: &E,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let call = Call::entity(E::KIND, address, Operation::Replace)
            .body(RequestBody::json(entity)?);
        self.run(call, cancel).await
    }

    pub async fn delete(
        &self,
        kind: EntityKind,
        address: Address,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.run(Call::entity(kind, address, Operation::Delete), cancel)
            .await
    }

    /// Duplicate an entity. Each call creates another copy.
    pub async fn duplicate(
        &self,
        kind: EntityKind,
        address: Address,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.run(Call::entity(kind, address, Operation::Duplicate), cancel)
            .await
    }

    pub async fn select(
        &self,
        kind: EntityKind,
        address: Address,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.run(Call::entity(kind, address, Operation::Select), cancel)
            .await
    }

    /// Connect (`Some(true)`), disconnect (`Some(false)`) or toggle (`None`)
    /// a column or clip.
    pub async fn connect(
        &self,
        kind: EntityKind,
        address: Address,
        connect: Option<bool>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let call = Call::entity(kind, address, Operation::Connect)
            .body(RequestBody::optional_flag(connect)?);
        self.run(call, cancel).await
    }

    /// Reset a parameter of an entity to its default. `parameter` is the
    /// parameter path below the entity, for example `video/opacity`.
    pub async fn reset_parameter(
        &self,
        kind: EntityKind,
        address: Address,
        parameter: &str,
        options: ResetParameter,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let slots = [("parameter", parameter.to_string())];
        let call = Call::entity(kind, address, Operation::ResetParameter)
            .slots(&slots)
            .body(RequestBody::json(&options)?);
        self.run(call, cancel).await
    }

    /// Add a new deck, layer, layer group or column, optionally before the
    /// entity referenced by `before_uri`.
    pub async fn add(
        &self,
        kind: EntityKind,
        before_uri: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let call = Call::new(Scope::Collection(kind), Operation::Add)
            .body(RequestBody::optional_text(before_uri));
        self.run(call, cancel).await
    }

    /// Disconnect the playing clip of a layer, or unload a clip.
    pub async fn clear(
        &self,
        kind: EntityKind,
        address: Address,
        cancel: &CancellationToken,
    ) -> Result<()> {
        self.run(Call::entity(kind, address, Operation::Clear), cancel)
            .await
    }

    /// Unload every clip in a layer.
    pub async fn clear_layer_clips(&self, address: Address, cancel: &CancellationToken) -> Result<()> {
        self.run(
            Call::entity(EntityKind::Layer, address, Operation::ClearClips),
            cancel,
        )
        .await
    }

    /// Load a file or source into a clip.
    pub async fn open_clip(
        &self,
        address: Address,
        uri: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        if uri.is_empty() {
            return Err(Error::InvalidArgument("clip uri must not be empty".to_string()));
        }
        let call = Call::entity(EntityKind::Clip, address, Operation::Open)
            .body(RequestBody::text(uri));
        self.run(call, cancel).await
    }

    pub async fn close_deck(&self, deck_id: i64, cancel: &CancellationToken) -> Result<()> {
        self.run(
            Call::entity(EntityKind::Deck, Address::Id(deck_id), Operation::Close),
            cancel,
        )
        .await
    }

    /// Re-open a closed deck.
    pub async fn reopen_deck(&self, deck_id: i64, cancel: &CancellationToken) -> Result<()> {
        self.run(
            Call::entity(EntityKind::Deck, Address::Id(deck_id), Operation::Reopen),
            cancel,
        )
        .await
    }

    /// Move an existing layer into a layer group.
    pub async fn move_layer_to_group(
        &self,
        group: Address,
        layer_uri: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let call = Call::entity(EntityKind::LayerGroup, group, Operation::MoveLayer)
            .body(RequestBody::text(layer_uri));
        self.run(call, cancel).await
    }

    /// Create a new layer inside a layer group.
    pub async fn add_layer_to_group(
        &self,
        group: Address,
        before_uri: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let call = Call::entity(EntityKind::LayerGroup, group, Operation::AddLayer)
            .body(RequestBody::optional_text(before_uri));
        self.run(call, cancel).await
    }

    /// Add a video effect to a layer or clip.
    pub async fn add_effect(
        &self,
        kind: EntityKind,
        address: Address,
        effect_uri: &str,
        offset: Option<u32>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let (operation, slots) = match offset {
            Some(offset) => (Operation::AddEffectAt, vec![("offset", offset.to_string())]),
            None => (Operation::AddEffect, Vec::new()),
        };
        let call = Call::entity(kind, address, operation)
            .slots(&slots)
            .body(RequestBody::text(effect_uri));
        self.run(call, cancel).await
    }

    pub async fn delete_effect(
        &self,
        kind: EntityKind,
        address: Address,
        offset: u32,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let slots = [("offset", offset.to_string())];
        let call = Call::entity(kind, address, Operation::DeleteEffect).slots(&slots);
        self.run(call, cancel).await
    }
}
