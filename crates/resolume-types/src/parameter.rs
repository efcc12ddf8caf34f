//! Self-describing parameters reported by the remote mixer.
//!
//! Every settable property is sent as a JSON object carrying a `valuetype`
//! tag. The concrete structs below hold the kind-specific fields only; the
//! tag lives on [`Parameter`], so a payload can never claim one kind while
//! carrying another kind's fields.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// JSON field carrying the value-kind tag.
pub const VALUE_TYPE_FIELD: &str = "valuetype";

/// Display hints attached to a parameter.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ParameterView {
    /// Text appended to the displayed value (for example `%`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Increment used by UI controls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    /// Factor applied to the raw value before display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    /// Unit label for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_units: Option<String>,
    /// Preferred UI control.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_type: Option<String>,
}

/// A true/false value.
///
/// Fields the remote omits decode to their zero value, here and in the
/// other kinds below.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BooleanParameter {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub value: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ParameterView>,
}

/// One value out of a fixed list of options.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChoiceParameter {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub value: String,
    /// Position of `value` within `options`.
    #[serde(default)]
    pub index: i32,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ParameterView>,
}

/// A color value (`#rrggbbaa`) with an optional palette.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ColorParameter {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub palette: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ParameterView>,
}

/// A trigger without a stored value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EventParameter {
    #[serde(default)]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ParameterView>,
}

/// An integral value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IntegerParameter {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ParameterView>,
}

/// A floating point value bounded by `min`/`max`, with an in/out window.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RangeParameter {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
    #[serde(default, rename = "in")]
    pub in_point: f64,
    #[serde(default, rename = "out")]
    pub out_point: f64,
    #[serde(default)]
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ParameterView>,
}

/// A single-line string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StringParameter {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ParameterView>,
}

/// A possibly multi-line string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TextParameter {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ParameterView>,
}

/// The closed set of value kinds the remote reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Boolean,
    Choice,
    Color,
    Event,
    Integer,
    Range,
    String,
    Text,
}

impl ParameterKind {
    /// Tag written on the wire for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ParameterKind::Boolean => "ParamBoolean",
            ParameterKind::Choice => "ParamChoice",
            ParameterKind::Color => "ParamColor",
            ParameterKind::Event => "ParamEvent",
            ParameterKind::Integer => "ParamNumber",
            ParameterKind::Range => "ParamRange",
            ParameterKind::String => "ParamString",
            ParameterKind::Text => "ParamText",
        }
    }

    /// Map a wire tag to a kind. `ParamState` is a choice list rendered as
    /// toggle buttons and shares the choice payload.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ParamBoolean" => Some(ParameterKind::Boolean),
            "ParamChoice" | "ParamState" => Some(ParameterKind::Choice),
            "ParamColor" => Some(ParameterKind::Color),
            "ParamEvent" => Some(ParameterKind::Event),
            "ParamNumber" => Some(ParameterKind::Integer),
            "ParamRange" => Some(ParameterKind::Range),
            "ParamString" => Some(ParameterKind::String),
            "ParamText" => Some(ParameterKind::Text),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Minimal view of a parameter payload, read before dispatching on the tag.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ParameterEnvelope {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, rename = "valuetype")]
    pub value_type: Option<String>,
}

impl ParameterEnvelope {
    pub fn kind(&self) -> Option<ParameterKind> {
        self.value_type.as_deref().and_then(ParameterKind::from_tag)
    }
}

/// A parameter of any kind.
///
/// Payloads whose tag is missing or not recognised decode to
/// [`Parameter::Unknown`] with the raw JSON preserved, so newer remote
/// versions do not break older clients.
#[derive(Clone, Debug, PartialEq)]
pub enum Parameter {
    Boolean(BooleanParameter),
    Choice(ChoiceParameter),
    Color(ColorParameter),
    Event(EventParameter),
    Integer(IntegerParameter),
    Range(RangeParameter),
    String(StringParameter),
    Text(TextParameter),
    Unknown {
        value_type: Option<String>,
        raw: Value,
    },
}

impl Parameter {
    /// Decode a parameter from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let envelope: ParameterEnvelope = match value {
            Value::Object(_) => ParameterEnvelope::deserialize(&value)?,
            _ => ParameterEnvelope::default(),
        };
        let Some(kind) = envelope.kind() else {
            return Ok(Parameter::Unknown {
                value_type: envelope.value_type,
                raw: value,
            });
        };
        let param = match kind {
            ParameterKind::Boolean => Parameter::Boolean(serde_json::from_value(value)?),
            ParameterKind::Choice => Parameter::Choice(serde_json::from_value(value)?),
            ParameterKind::Color => Parameter::Color(serde_json::from_value(value)?),
            ParameterKind::Event => Parameter::Event(serde_json::from_value(value)?),
            ParameterKind::Integer => Parameter::Integer(serde_json::from_value(value)?),
            ParameterKind::Range => Parameter::Range(serde_json::from_value(value)?),
            ParameterKind::String => Parameter::String(serde_json::from_value(value)?),
            ParameterKind::Text => Parameter::Text(serde_json::from_value(value)?),
        };
        Ok(param)
    }

    /// Encode to JSON, writing the value-kind tag next to the fields.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        let (kind, mut value) = match self {
            Parameter::Boolean(p) => (ParameterKind::Boolean, serde_json::to_value(p)?),
            Parameter::Choice(p) => (ParameterKind::Choice, serde_json::to_value(p)?),
            Parameter::Color(p) => (ParameterKind::Color, serde_json::to_value(p)?),
            Parameter::Event(p) => (ParameterKind::Event, serde_json::to_value(p)?),
            Parameter::Integer(p) => (ParameterKind::Integer, serde_json::to_value(p)?),
            Parameter::Range(p) => (ParameterKind::Range, serde_json::to_value(p)?),
            Parameter::String(p) => (ParameterKind::String, serde_json::to_value(p)?),
            Parameter::Text(p) => (ParameterKind::Text, serde_json::to_value(p)?),
            Parameter::Unknown { raw, .. } => return Ok(raw.clone()),
        };
        if let Value::Object(map) = &mut value {
            map.insert(
                VALUE_TYPE_FIELD.to_string(),
                Value::String(kind.tag().to_string()),
            );
        }
        Ok(value)
    }

    /// `None` for unknown kinds.
    pub fn kind(&self) -> Option<ParameterKind> {
        match self {
            Parameter::Boolean(_) => Some(ParameterKind::Boolean),
            Parameter::Choice(_) => Some(ParameterKind::Choice),
            Parameter::Color(_) => Some(ParameterKind::Color),
            Parameter::Event(_) => Some(ParameterKind::Event),
            Parameter::Integer(_) => Some(ParameterKind::Integer),
            Parameter::Range(_) => Some(ParameterKind::Range),
            Parameter::String(_) => Some(ParameterKind::String),
            Parameter::Text(_) => Some(ParameterKind::Text),
            Parameter::Unknown { .. } => None,
        }
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            Parameter::Boolean(p) => Some(p.id),
            Parameter::Choice(p) => Some(p.id),
            Parameter::Color(p) => Some(p.id),
            Parameter::Event(p) => Some(p.id),
            Parameter::Integer(p) => Some(p.id),
            Parameter::Range(p) => Some(p.id),
            Parameter::String(p) => Some(p.id),
            Parameter::Text(p) => Some(p.id),
            Parameter::Unknown { raw, .. } => raw.get("id").and_then(Value::as_i64),
        }
    }

    pub fn view(&self) -> Option<&ParameterView> {
        match self {
            Parameter::Boolean(p) => p.view.as_ref(),
            Parameter::Choice(p) => p.view.as_ref(),
            Parameter::Color(p) => p.view.as_ref(),
            Parameter::Event(p) => p.view.as_ref(),
            Parameter::Integer(p) => p.view.as_ref(),
            Parameter::Range(p) => p.view.as_ref(),
            Parameter::String(p) => p.view.as_ref(),
            Parameter::Text(p) => p.view.as_ref(),
            Parameter::Unknown { .. } => None,
        }
    }
}

impl Serialize for Parameter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Parameter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Parameter::from_value(value).map_err(D::Error::custom)
    }
}

/// Options for the reset-parameter operations.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetParameter {
    /// Also clear any animation attached to the parameter.
    #[serde(rename = "resetanimation")]
    pub reset_animation: bool,
}

/// Named parameters whose set is not fixed (dashboards, effect params,
/// mixers, source params).
pub type ParameterCollection = BTreeMap<String, Parameter>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatches_on_value_type_tag() {
        let param: Parameter = serde_json::from_value(json!({
            "id": 17,
            "valuetype": "ParamChoice",
            "value": "Add",
            "index": 1,
            "options": ["Alpha", "Add"]
        }))
        .unwrap();
        match param {
            Parameter::Choice(choice) => {
                assert_eq!(choice.id, 17);
                assert_eq!(choice.index, 1);
                assert_eq!(choice.options, vec!["Alpha".to_string(), "Add".to_string()]);
            }
            other => panic!("expected choice, got {other:?}"),
        }
    }

    #[test]
    fn state_tag_decodes_as_choice() {
        let param: Parameter = serde_json::from_value(json!({
            "id": 3,
            "valuetype": "ParamState",
            "value": "Disconnected",
            "index": 0,
            "options": ["Disconnected", "Connected"]
        }))
        .unwrap();
        assert_eq!(param.kind(), Some(ParameterKind::Choice));
    }

    #[test]
    fn unknown_tag_is_preserved_not_rejected() {
        let raw = json!({ "id": 9, "valuetype": "ParamVector", "value": [1, 2] });
        let param: Parameter = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(
            param,
            Parameter::Unknown {
                value_type: Some("ParamVector".to_string()),
                raw: raw.clone(),
            }
        );
        assert_eq!(param.id(), Some(9));
        assert_eq!(serde_json::to_value(&param).unwrap(), raw);
    }

    #[test]
    fn missing_tag_is_unknown() {
        let param: Parameter = serde_json::from_value(json!({ "id": 1, "value": 2 })).unwrap();
        assert!(matches!(param, Parameter::Unknown { value_type: None, .. }));
    }

    #[test]
    fn known_tag_with_mistyped_field_is_an_error() {
        let result: Result<Parameter, _> = serde_json::from_value(json!({
            "id": 1,
            "valuetype": "ParamRange",
            "value": "not a number"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn omitted_fields_fall_back_to_zero_values() {
        let param: Parameter = serde_json::from_value(json!({
            "id": 3, "valuetype": "ParamRange", "min": 0, "max": 1, "value": 1
        }))
        .unwrap();
        match param {
            Parameter::Range(range) => {
                assert_eq!(range.in_point, 0.0);
                assert_eq!(range.out_point, 0.0);
                assert_eq!(range.value, 1.0);
            }
            other => panic!("expected range, got {other:?}"),
        }
        let param: Parameter =
            serde_json::from_value(json!({ "valuetype": "ParamBoolean" })).unwrap();
        assert_eq!(
            param,
            Parameter::Boolean(BooleanParameter { id: 0, value: false, view: None })
        );
    }

    #[test]
    fn range_parameter_round_trip_keeps_bounds() {
        let range = RangeParameter {
            id: 1_600_000_000_123,
            min: -1.0,
            max: 4.5,
            in_point: 0.25,
            out_point: 3.75,
            value: 2.0,
            view: Some(ParameterView {
                suffix: Some("x".to_string()),
                step: Some(0.01),
                multiplier: None,
                display_units: None,
                control_type: None,
            }),
        };
        let encoded = serde_json::to_string(&Parameter::Range(range.clone())).unwrap();
        assert!(encoded.contains("\"in\":0.25"));
        assert!(encoded.contains("\"valuetype\":\"ParamRange\""));
        let decoded: Parameter = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, Parameter::Range(range));
    }

    #[test]
    fn encode_writes_tag_for_every_kind() {
        let params = vec![
            Parameter::Boolean(BooleanParameter { id: 1, value: true, view: None }),
            Parameter::Event(EventParameter { id: 2, view: None }),
            Parameter::Integer(IntegerParameter { id: 3, value: 12, view: None }),
            Parameter::Text(TextParameter { id: 4, value: "a\nb".to_string(), view: None }),
        ];
        let tags: Vec<String> = params
            .iter()
            .map(|p| p.to_value().unwrap()[VALUE_TYPE_FIELD].as_str().unwrap().to_string())
            .collect();
        assert_eq!(tags, vec!["ParamBoolean", "ParamEvent", "ParamNumber", "ParamText"]);
    }

    #[test]
    fn reset_options_use_wire_name() {
        let body = serde_json::to_value(ResetParameter { reset_animation: true }).unwrap();
        assert_eq!(body, json!({ "resetanimation": true }));
    }
}
