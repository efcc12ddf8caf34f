//! The top-level composition.

use serde::{Deserialize, Serialize};

use crate::deck::{Column, Deck};
use crate::layer::{Layer, LayerGroup};
use crate::parameter::{
    BooleanParameter, ChoiceParameter, EventParameter, ParameterCollection, RangeParameter,
    StringParameter,
};
use crate::track::{AudioTrack, VideoTrack};

/// Crossfade between the A and B sides of the composition.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CrossFader {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behaviour: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidea: Option<EventParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sideb: Option<EventParameter>,
    #[serde(default, skip_serializing_if = "ParameterCollection::is_empty")]
    pub mixer: ParameterCollection,
}

/// Global tempo controls.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TempoController {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_pull: Option<EventParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_push: Option<EventParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_tap: Option<EventParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resync: Option<EventParameter>,
}

/// Full mixing state: decks, layers, groups and columns of the open
/// composition.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Composition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<StringParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bypassed: Option<BooleanParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<RangeParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cliptarget: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cliptriggerstyle: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clipbeatsnap: Option<ChoiceParameter>,
    #[serde(default, skip_serializing_if = "ParameterCollection::is_empty")]
    pub dashboard: ParameterCollection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioTrack>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoTrack>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossfader: Option<CrossFader>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub decks: Vec<Deck>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layers: Vec<Layer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<Column>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layergroups: Vec<LayerGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo_controller: Option<TempoController>,
}

impl Composition {
    /// Look up a layer anywhere in the tree, including inside groups.
    pub fn find_layer(&self, id: i64) -> Option<&Layer> {
        self.layers
            .iter()
            .chain(self.layergroups.iter().flat_map(|group| group.layers.iter()))
            .find(|layer| layer.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn find_layer_searches_groups() {
        let comp: Composition = serde_json::from_value(json!({
            "layers": [{ "id": 1 }],
            "layergroups": [{ "id": 10, "layers": [{ "id": 2, "clips": [{ "id": 20 }] }] }]
        }))
        .unwrap();
        assert_eq!(comp.find_layer(2).map(|l| l.clips.len()), Some(1));
        assert!(comp.find_layer(3).is_none());
    }
}
