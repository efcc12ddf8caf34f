//! Data model of the Resolume Arena/Avenue REST API.
//!
//! These are plain transfer objects: each read produces a fresh copy of the
//! remote state and nothing here is cached or kept in sync.

mod clip;
mod composition;
mod deck;
mod layer;
mod parameter;
mod product;
mod track;

pub use clip::{Clip, ClipThumbnail, Transport, TransportControls};
pub use composition::{Composition, CrossFader, TempoController};
pub use deck::{Column, Deck};
pub use layer::{AutoPilot, Layer, LayerGroup, LayerTransition};
pub use parameter::{
    BooleanParameter, ChoiceParameter, ColorParameter, EventParameter, IntegerParameter,
    Parameter, ParameterCollection, ParameterEnvelope, ParameterKind, ParameterView,
    RangeParameter, ResetParameter, StringParameter, TextParameter, VALUE_TYPE_FIELD,
};
pub use product::{ApiErrorBody, Effects, Plugin, Preset, ProductInfo, Sources};
pub use track::{
    AudioEffect, AudioFileInfo, AudioTrack, AudioTrackClip, FrameRate, VideoEffect,
    VideoFileInfo, VideoTrack, VideoTrackClip, VideoTrackLayer,
};
