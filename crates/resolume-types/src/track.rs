//! Audio/video tracks and effect chains shared by clips, layers, groups and
//! the composition.
//!
//! Clip and layer tracks reuse the generic track fields by flattening the
//! base struct into their own payload.

use serde::{Deserialize, Serialize};

use crate::parameter::{
    BooleanParameter, ChoiceParameter, ParameterCollection, RangeParameter,
};

/// A single audio effect in a chain.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AudioEffect {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypassed: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "ParameterCollection::is_empty")]
    pub params: ParameterCollection,
}

/// A single video effect in a chain.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoEffect {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypassed: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "ParameterCollection::is_empty")]
    pub mixer: ParameterCollection,
    #[serde(default, skip_serializing_if = "ParameterCollection::is_empty")]
    pub params: ParameterCollection,
    #[serde(default, skip_serializing_if = "ParameterCollection::is_empty")]
    pub effect: ParameterCollection,
}

/// Metadata for the audio file loaded into a clip.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AudioFileInfo {
    pub path: String,
    pub exists: bool,
    /// Human readable duration.
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub duration_ms: f64,
    #[serde(default)]
    pub sample_rate: f64,
    #[serde(default)]
    pub num_channels: i32,
    #[serde(default)]
    pub bpm: f64,
}

/// Frame rate as a ratio.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameRate {
    pub num: i32,
    pub denom: i32,
}

/// Metadata for the video file loaded into a clip.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoFileInfo {
    pub path: String,
    pub exists: bool,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub duration_ms: f64,
    #[serde(default)]
    pub framerate: FrameRate,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
}

/// Audio track of a composition, group or layer.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AudioTrack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<AudioEffect>,
}

/// Audio track of a clip: the generic track plus file details.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AudioTrackClip {
    #[serde(flatten)]
    pub track: AudioTrack,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fileinfo: Option<AudioFileInfo>,
}

/// Video track of a composition or group.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoTrack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "ParameterCollection::is_empty")]
    pub mixer: ParameterCollection,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<VideoEffect>,
}

/// Video track of a layer.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoTrackLayer {
    #[serde(flatten)]
    pub track: VideoTrack,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autosize: Option<ChoiceParameter>,
}

/// Video track of a clip.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoTrackClip {
    #[serde(flatten)]
    pub track: VideoTrack,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fileinfo: Option<VideoFileInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize: Option<ChoiceParameter>,
    /// Red channel enable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "ParameterCollection::is_empty")]
    pub sourceparams: ParameterCollection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clip_video_track_flattens_generic_fields() {
        let track: VideoTrackClip = serde_json::from_value(json!({
            "opacity": {
                "id": 5, "valuetype": "ParamRange",
                "min": 0.0, "max": 1.0, "in": 0.0, "out": 1.0, "value": 0.5
            },
            "description": "loop.mov",
            "fileinfo": {
                "path": "C:/loops/loop.mov", "exists": true,
                "duration_ms": 4000.0,
                "framerate": { "num": 30, "denom": 1 },
                "width": 1920, "height": 1080
            },
            "r": { "id": 6, "valuetype": "ParamBoolean", "value": true }
        }))
        .unwrap();
        assert_eq!(track.track.opacity.as_ref().map(|p| p.value), Some(0.5));
        assert_eq!(track.description.as_deref(), Some("loop.mov"));
        assert_eq!(track.fileinfo.as_ref().map(|f| f.framerate.num), Some(30));
        assert!(track.r.as_ref().is_some_and(|p| p.value));

        let encoded = serde_json::to_value(&track).unwrap();
        assert!(encoded.get("track").is_none());
        assert_eq!(encoded["opacity"]["value"], json!(0.5));
    }

    #[test]
    fn effect_params_decode_into_typed_collection() {
        let effect: VideoEffect = serde_json::from_value(json!({
            "id": 44,
            "name": "Blur",
            "display_name": "Soft Blur",
            "params": {
                "Radius": {
                    "id": 45, "valuetype": "ParamRange",
                    "min": 0.0, "max": 100.0, "in": 0.0, "out": 100.0, "value": 12.0
                }
            }
        }))
        .unwrap();
        let radius = effect.params.get("Radius").unwrap();
        assert_eq!(radius.kind(), Some(crate::ParameterKind::Range));
        assert!(effect.mixer.is_empty());
    }
}
