//! Command line forms of entity kinds and addresses.

use clap::ValueEnum;
use resolume_client::{Address, EntityKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Deck,
    Layer,
    Group,
    Column,
    Clip,
}

impl From<Kind> for EntityKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Deck => EntityKind::Deck,
            Kind::Layer => EntityKind::Layer,
            Kind::Group => EntityKind::LayerGroup,
            Kind::Column => EntityKind::Column,
            Kind::Clip => EntityKind::Clip,
        }
    }
}

/// Parse an address: `3` (index), `2/5` (layer/clip), `id:1234` or
/// `selected`.
pub fn parse_address(raw: &str) -> Result<Address, String> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("selected") {
        return Ok(Address::Selected);
    }
    if let Some(id) = raw.strip_prefix("id:") {
        return id
            .parse::<i64>()
            .map(Address::Id)
            .map_err(|e| format!("invalid id {id:?}: {e}"));
    }
    if let Some((layer, clip)) = raw.split_once('/') {
        let layer = layer
            .parse::<u32>()
            .map_err(|e| format!("invalid layer index {layer:?}: {e}"))?;
        let clip = clip
            .parse::<u32>()
            .map_err(|e| format!("invalid clip index {clip:?}: {e}"))?;
        return Ok(Address::Position { layer, clip });
    }
    raw.parse::<u32>()
        .map(Address::Index)
        .map_err(|_| format!("expected INDEX, LAYER/CLIP, id:ID or selected, got {raw:?}"))
}
