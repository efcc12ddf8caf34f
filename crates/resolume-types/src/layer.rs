//! Layers and layer groups.

use serde::{Deserialize, Serialize};

use crate::clip::Clip;
use crate::parameter::{
    BooleanParameter, ChoiceParameter, ParameterCollection, RangeParameter, StringParameter,
};
use crate::track::{AudioTrack, VideoTrack, VideoTrackLayer};

/// How a layer blends from one clip to the next.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LayerTransition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend_mode: Option<ChoiceParameter>,
}

/// Automatic clip advance settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AutoPilot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ChoiceParameter>,
}

/// A track holding one row of clips.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Layer {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<StringParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorid: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypassed: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solo: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossfadergroup: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maskmode: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignorecolumntrigger: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faderstart: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "ParameterCollection::is_empty")]
    pub dashboard: ParameterCollection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioTrack>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoTrackLayer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<LayerTransition>,
    /// Clips in column order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clips: Vec<Clip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autopilot: Option<AutoPilot>,
}

/// A group of layers mixed together before the composition.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LayerGroup {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<StringParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorid: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypassed: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solo: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossfadergroup: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignorecolumntrigger: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "ParameterCollection::is_empty")]
    pub dashboard: ParameterCollection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioTrack>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoTrack>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layers: Vec<Layer>,
}
