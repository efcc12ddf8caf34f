//! Composition-wide operations.

use std::fmt;
use std::str::FromStr;

use tokio_util::sync::CancellationToken;

use resolume_types::{Composition, ResetParameter};

use super::{Call, ResolumeClient};
use crate::catalog::{Operation, Scope};
use crate::codec::RequestBody;
use crate::error::{Error, Result};

/// Undo/redo step on the composition history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryAction {
    Undo,
    Redo,
}

impl HistoryAction {
    pub fn as_str(self) -> &'static str {
        match self {
            HistoryAction::Undo => "undo",
            HistoryAction::Redo => "redo",
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "undo" => Ok(HistoryAction::Undo),
            "redo" => Ok(HistoryAction::Redo),
            other => Err(Error::InvalidArgument(format!(
                "invalid action: {other} (must be 'undo' or 'redo')"
            ))),
        }
    }
}

impl ResolumeClient {
    /// Retrieve the complete composition.
    pub async fn composition(&self, cancel: &CancellationToken) -> Result<Composition> {
        self.fetch(Call::new(Scope::Composition, Operation::Get), cancel)
            .await
    }

    /// Update the composition. Only the fields present are applied.
    pub async fn replace_composition(
        &self,
        composition: &Composition,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let call = Call::new(Scope::Composition, Operation::Replace)
            .body(RequestBody::json(composition)?);
        self.run(call, cancel).await
    }

    /// Run `undo` or `redo`. Any other value fails without contacting the
    /// server.
    pub async fn composition_action(&self, action: &str, cancel: &CancellationToken) -> Result<()> {
        let action: HistoryAction = action.parse()?;
        self.history(action, cancel).await
    }

    pub async fn history(&self, action: HistoryAction, cancel: &CancellationToken) -> Result<()> {
        let call = Call::new(Scope::Composition, Operation::Action)
            .body(RequestBody::text(action.as_str()));
        self.run(call, cancel).await
    }

    /// Disconnect every playing clip.
    pub async fn disconnect_all(&self, cancel: &CancellationToken) -> Result<()> {
        self.run(Call::new(Scope::Composition, Operation::DisconnectAll), cancel)
            .await
    }

    /// Reset a composition parameter (for example `master` or
    /// `video/opacity`) to its default. The new value is not returned.
    pub async fn reset_composition_parameter(
        &self,
        parameter: &str,
        options: ResetParameter,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let slots = [("parameter", parameter.to_string())];
        let call = Call::new(Scope::Composition, Operation::ResetParameter)
            .slots(&slots)
            .body(RequestBody::json(&options)?);
        self.run(call, cancel).await
    }

    /// Add an effect to the composition, at the end of the chain or at
    /// `offset`.
    pub async fn add_composition_effect(
        &self,
        effect_uri: &str,
        offset: Option<u32>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let (operation, slots) = match offset {
            Some(offset) => (Operation::AddEffectAt, vec![("offset", offset.to_string())]),
            None => (Operation::AddEffect, Vec::new()),
        };
        let call = Call::new(Scope::Composition, operation)
            .slots(&slots)
            .body(RequestBody::text(effect_uri));
        self.run(call, cancel).await
    }

    /// Move an existing effect to the end of the chain or to `offset`.
    pub async fn move_composition_effect(
        &self,
        effect_uri: &str,
        offset: Option<u32>,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let (operation, slots) = match offset {
            Some(offset) => (Operation::MoveEffectTo, vec![("offset", offset.to_string())]),
            None => (Operation::MoveEffect, Vec::new()),
        };
        let call = Call::new(Scope::Composition, operation)
            .slots(&slots)
            .body(RequestBody::text(effect_uri));
        self.run(call, cancel).await
    }

    pub async fn delete_composition_effect(
        &self,
        offset: u32,
        cancel: &CancellationToken,
    ) -> Result<()> {
        let slots = [("offset", offset.to_string())];
        let call = Call::new(Scope::Composition, Operation::DeleteEffect).slots(&slots);
        self.run(call, cancel).await
    }

    /// Rename an effect anywhere in the composition.
    pub async fn set_effect_display_name(
        &self,
        effect_id: i64,
        display_name: &str,
        cancel: &CancellationToken,
    ) -> Result<()> {
        if effect_id < 0 {
            return Err(Error::InvalidArgument(format!(
                "effect id must be non-negative, got {effect_id}"
            )));
        }
        let slots = [("effect", effect_id.to_string())];
        let call = Call::new(Scope::Composition, Operation::SetEffectDisplayName)
            .slots(&slots)
            .body(RequestBody::text(display_name));
        self.run(call, cancel).await
    }
}
