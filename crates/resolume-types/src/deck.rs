//! Decks and columns.

use serde::{Deserialize, Serialize};

use crate::parameter::{BooleanParameter, ChoiceParameter, IntegerParameter, StringParameter};

/// A named set of layers and clips that can be swapped in and out of the
/// composition.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Deck {
    /// Remote-assigned id, stable for the session.
    pub id: i64,
    /// `true` when the deck is closed and its clips are unloaded.
    #[serde(default)]
    pub closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<StringParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorid: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<BooleanParameter>,
    /// Horizontal scroll position of the clip grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrollx: Option<IntegerParameter>,
}

/// A trigger column across all layers of the current deck.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Column {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<StringParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorid: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<BooleanParameter>,
}
