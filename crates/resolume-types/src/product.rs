//! Product information, effect/source listings and the API error body.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name and version of the running application.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductInfo {
    pub name: String,
    pub major: i64,
    pub minor: i64,
    pub micro: i64,
    pub revision: i64,
}

impl fmt::Display for ProductInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}.{}.{} (rev {})",
            self.name, self.major, self.minor, self.micro, self.revision
        )
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preset {
    pub id: i64,
    pub name: String,
}

/// An effect or source plugin that can be added to the composition.
///
/// `idstring` is the value to pass as effect/source URI.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plugin {
    pub idstring: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<Preset>,
}

/// Available video effects.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Effects {
    #[serde(default)]
    pub video: Vec<Plugin>,
}

/// Available video sources (generators).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sources {
    #[serde(default)]
    pub video: Vec<Plugin>,
}

/// Error body returned with failing status codes.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub code: i64,
    pub message: String,
}
