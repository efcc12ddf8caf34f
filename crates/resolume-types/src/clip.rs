//! Clips and their transport controls.

use serde::{Deserialize, Serialize};

use crate::parameter::{
    BooleanParameter, ChoiceParameter, ParameterCollection, RangeParameter, StringParameter,
};
use crate::track::{AudioTrackClip, VideoTrackClip};

/// Playback controls of a clip.
///
/// Timeline and BPM-sync transports share most controls; `bpm`, `syncmode`
/// and `beatloop` are only reported while the clip runs in BPM sync mode
/// (see [`Clip::transporttype`]).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TransportControls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playdirection: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playmode: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playmodeaway: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpm: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syncmode: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beatloop: Option<ChoiceParameter>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Transport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<RangeParameter>,
    #[serde(default)]
    pub controls: TransportControls,
}

impl Transport {
    pub fn is_bpm_sync(&self) -> bool {
        self.controls.bpm.is_some()
            || self.controls.syncmode.is_some()
            || self.controls.beatloop.is_some()
    }
}

/// Thumbnail metadata; the image itself is fetched separately.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClipThumbnail {
    /// Size in bytes.
    pub size: i64,
    #[serde(default)]
    pub last_update: String,
    #[serde(default)]
    pub is_default: bool,
}

/// A playable cell at a layer/column coordinate.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Clip {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<StringParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colorid: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<BooleanParameter>,
    /// Connection state (`Empty`, `Disconnected`, `Previewing`, `Connected`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggerstyle: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignorecolumntrigger: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faderstart: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beatsnap: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transporttype: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<Transport>,
    #[serde(default, skip_serializing_if = "ParameterCollection::is_empty")]
    pub dashboard: ParameterCollection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioTrackClip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoTrackClip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ClipThumbnail>,
}
