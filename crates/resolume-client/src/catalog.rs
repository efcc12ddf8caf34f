//! Endpoint catalog.
//!
//! Every remote capability is one [`Route`] row: the scope it applies to,
//! the operation, which addressing families it accepts, the verb, a suffix
//! template and the request/response kinds. Entities share one row per
//! operation instead of one method per addressing scheme; [`resolve`] turns
//! a row plus an [`Address`] into a concrete path.

use std::fmt;

use crate::error::{Error, Result};

/// Entities that can be addressed inside the composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Deck,
    Layer,
    LayerGroup,
    Column,
    Clip,
}

impl EntityKind {
    /// Path segment of the entity collection below `/composition`.
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Deck => "decks",
            EntityKind::Layer => "layers",
            EntityKind::LayerGroup => "layergroups",
            EntityKind::Column => "columns",
            EntityKind::Clip => "clips",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Deck => "deck",
            EntityKind::Layer => "layer",
            EntityKind::LayerGroup => "layer group",
            EntityKind::Column => "column",
            EntityKind::Clip => "clip",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How an entity is located.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Address {
    /// Zero-based position within the parent's ordered children.
    Index(u32),
    /// Clip grid coordinate: layer index and clip (column) index.
    Position { layer: u32, clip: u32 },
    /// Remote-assigned id.
    Id(i64),
    /// Whatever is currently selected in the application.
    Selected,
}

impl Address {
    pub fn family(&self) -> Family {
        match self {
            Address::Index(_) => Family::Index,
            Address::Position { .. } => Family::Position,
            Address::Id(_) => Family::Id,
            Address::Selected => Family::Selected,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Index(index) => write!(f, "index {index}"),
            Address::Position { layer, clip } => write!(f, "layer {layer} clip {clip}"),
            Address::Id(id) => write!(f, "id {id}"),
            Address::Selected => f.write_str("selected"),
        }
    }
}

/// Addressing scheme accepted by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// No address: the path is fixed.
    Fixed,
    Index,
    Position,
    Id,
    Selected,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Fixed => "fixed",
            Family::Index => "by-index",
            Family::Position => "by-position",
            Family::Id => "by-id",
            Family::Selected => "selected",
        };
        f.write_str(name)
    }
}

/// What a route applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    Product,
    Effects,
    Sources,
    Composition,
    /// A single parameter addressed by id.
    Parameter,
    /// The collection of an entity kind (used for `add`).
    Collection(EntityKind),
    Entity(EntityKind),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Product => f.write_str("product"),
            Scope::Effects => f.write_str("effects"),
            Scope::Sources => f.write_str("sources"),
            Scope::Composition => f.write_str("composition"),
            Scope::Parameter => f.write_str("parameter"),
            Scope::Collection(kind) => write!(f, "{} collection", kind),
            Scope::Entity(kind) => write!(f, "{}", kind),
        }
    }
}

/// Logical operation performed by a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Get,
    Replace,
    Delete,
    Duplicate,
    Select,
    Connect,
    ResetParameter,
    Add,
    Clear,
    ClearClips,
    Open,
    Close,
    Reopen,
    MoveLayer,
    AddLayer,
    AddEffect,
    AddEffectAt,
    MoveEffect,
    MoveEffectTo,
    DeleteEffect,
    SetEffectDisplayName,
    Action,
    DisconnectAll,
    Thumbnail,
    SetThumbnail,
    ResetThumbnail,
    DummyThumbnail,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Get => "get",
            Operation::Replace => "replace",
            Operation::Delete => "delete",
            Operation::Duplicate => "duplicate",
            Operation::Select => "select",
            Operation::Connect => "connect",
            Operation::ResetParameter => "reset parameter",
            Operation::Add => "add",
            Operation::Clear => "clear",
            Operation::ClearClips => "clear clips",
            Operation::Open => "open",
            Operation::Close => "close",
            Operation::Reopen => "reopen",
            Operation::MoveLayer => "move layer",
            Operation::AddLayer => "add layer",
            Operation::AddEffect => "add effect",
            Operation::AddEffectAt => "add effect at offset",
            Operation::MoveEffect => "move effect",
            Operation::MoveEffectTo => "move effect to offset",
            Operation::DeleteEffect => "delete effect",
            Operation::SetEffectDisplayName => "set effect display name",
            Operation::Action => "action",
            Operation::DisconnectAll => "disconnect all",
            Operation::Thumbnail => "get thumbnail",
            Operation::SetThumbnail => "set thumbnail",
            Operation::ResetThumbnail => "reset thumbnail",
            Operation::DummyThumbnail => "get dummy thumbnail",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Put,
    Post,
    Delete,
}

impl Verb {
    pub fn method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Put => reqwest::Method::PUT,
            Verb::Post => reqwest::Method::POST,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Body shape a route expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Empty,
    Json,
    /// JSON value or no body at all (tri-state flags).
    OptionalJson,
    /// Raw string such as an object URI.
    Text,
    OptionalText,
    /// `multipart/form-data` with a single `file` field.
    Multipart,
}

/// Body shape a route returns on success.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// Nothing useful; the body is discarded.
    Empty,
    Json,
    /// Raw bytes (images).
    Bytes,
}

/// One row of the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    pub scope: Scope,
    pub operation: Operation,
    pub families: &'static [Family],
    pub verb: Verb,
    /// Appended to the scope path; `{name}` marks a slot.
    pub suffix: &'static str,
    pub request: RequestKind,
    pub response: ResponseKind,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operation, self.scope)
    }
}

const FIXED: &[Family] = &[Family::Fixed];
const ID: &[Family] = &[Family::Id];
const INDEX_ID: &[Family] = &[Family::Index, Family::Id];
const INDEX_ID_SELECTED: &[Family] = &[Family::Index, Family::Id, Family::Selected];
const POSITION_ID: &[Family] = &[Family::Position, Family::Id];
const CLIP_ALL: &[Family] = &[Family::Position, Family::Id, Family::Selected];

const DECK: Scope = Scope::Entity(EntityKind::Deck);
const LAYER: Scope = Scope::Entity(EntityKind::Layer);
const GROUP: Scope = Scope::Entity(EntityKind::LayerGroup);
const COLUMN: Scope = Scope::Entity(EntityKind::Column);
const CLIP: Scope = Scope::Entity(EntityKind::Clip);

const fn route(
    scope: Scope,
    operation: Operation,
    families: &'static [Family],
    verb: Verb,
    suffix: &'static str,
    request: RequestKind,
    response: ResponseKind,
) -> Route {
    Route {
        scope,
        operation,
        families,
        verb,
        suffix,
        request,
        response,
    }
}

use Operation as Op;
use RequestKind as Req;
use ResponseKind as Resp;

static ROUTES: &[Route] = &[
    // global
    route(Scope::Product, Op::Get, FIXED, Verb::Get, "", Req::Empty, Resp::Json),
    route(Scope::Effects, Op::Get, FIXED, Verb::Get, "", Req::Empty, Resp::Json),
    route(Scope::Sources, Op::Get, FIXED, Verb::Get, "", Req::Empty, Resp::Json),
    route(Scope::Parameter, Op::Get, ID, Verb::Get, "", Req::Empty, Resp::Json),
    route(Scope::Parameter, Op::Replace, ID, Verb::Put, "", Req::Json, Resp::Empty),
    route(Scope::Parameter, Op::ResetParameter, ID, Verb::Post, "/reset", Req::Json, Resp::Empty),
    // composition
    route(Scope::Composition, Op::Get, FIXED, Verb::Get, "", Req::Empty, Resp::Json),
    route(Scope::Composition, Op::Replace, FIXED, Verb::Put, "", Req::Json, Resp::Empty),
    route(Scope::Composition, Op::Action, FIXED, Verb::Post, "/action", Req::Text, Resp::Empty),
    route(Scope::Composition, Op::DisconnectAll, FIXED, Verb::Post, "/disconnect-all", Req::Empty, Resp::Empty),
    route(Scope::Composition, Op::ResetParameter, FIXED, Verb::Post, "/{parameter}/reset", Req::Json, Resp::Empty),
    route(Scope::Composition, Op::AddEffect, FIXED, Verb::Post, "/effects/video/add", Req::Text, Resp::Empty),
    route(Scope::Composition, Op::AddEffectAt, FIXED, Verb::Post, "/effects/video/add/{offset}", Req::Text, Resp::Empty),
    route(Scope::Composition, Op::MoveEffect, FIXED, Verb::Post, "/effects/video/move", Req::Text, Resp::Empty),
    route(Scope::Composition, Op::MoveEffectTo, FIXED, Verb::Post, "/effects/video/move/{offset}", Req::Text, Resp::Empty),
    route(Scope::Composition, Op::DeleteEffect, FIXED, Verb::Delete, "/effects/video/{offset}", Req::Empty, Resp::Empty),
    route(Scope::Composition, Op::SetEffectDisplayName, FIXED, Verb::Post, "/effects/by-id/{effect}/set-display-name", Req::Text, Resp::Empty),
    route(Scope::Composition, Op::DummyThumbnail, FIXED, Verb::Get, "/thumbnail/dummy", Req::Empty, Resp::Bytes),
    // collections
    route(Scope::Collection(EntityKind::Deck), Op::Add, FIXED, Verb::Post, "/add", Req::OptionalText, Resp::Empty),
    route(Scope::Collection(EntityKind::Layer), Op::Add, FIXED, Verb::Post, "/add", Req::OptionalText, Resp::Empty),
    route(Scope::Collection(EntityKind::LayerGroup), Op::Add, FIXED, Verb::Post, "/add", Req::OptionalText, Resp::Empty),
    route(Scope::Collection(EntityKind::Column), Op::Add, FIXED, Verb::Post, "/add", Req::OptionalText, Resp::Empty),
    // decks
    route(DECK, Op::Get, INDEX_ID, Verb::Get, "", Req::Empty, Resp::Json),
    route(DECK, Op::Replace, INDEX_ID, Verb::Put, "", Req::Json, Resp::Empty),
    route(DECK, Op::Delete, INDEX_ID, Verb::Delete, "", Req::Empty, Resp::Empty),
    route(DECK, Op::Duplicate, INDEX_ID, Verb::Post, "/duplicate", Req::Empty, Resp::Empty),
    route(DECK, Op::Select, INDEX_ID, Verb::Post, "/select", Req::Empty, Resp::Empty),
    route(DECK, Op::ResetParameter, INDEX_ID, Verb::Post, "/{parameter}/reset", Req::Json, Resp::Empty),
    route(DECK, Op::Close, ID, Verb::Post, "/close", Req::Empty, Resp::Empty),
    route(DECK, Op::Reopen, ID, Verb::Post, "/open", Req::Empty, Resp::Empty),
    // layers
    route(LAYER, Op::Get, INDEX_ID_SELECTED, Verb::Get, "", Req::Empty, Resp::Json),
    route(LAYER, Op::Replace, INDEX_ID_SELECTED, Verb::Put, "", Req::Json, Resp::Empty),
    route(LAYER, Op::Delete, INDEX_ID, Verb::Delete, "", Req::Empty, Resp::Empty),
    route(LAYER, Op::Duplicate, INDEX_ID_SELECTED, Verb::Post, "/duplicate", Req::Empty, Resp::Empty),
    route(LAYER, Op::Select, INDEX_ID, Verb::Post, "/select", Req::Empty, Resp::Empty),
    route(LAYER, Op::ResetParameter, INDEX_ID_SELECTED, Verb::Post, "/{parameter}/reset", Req::Json, Resp::Empty),
    route(LAYER, Op::Clear, INDEX_ID_SELECTED, Verb::Post, "/clear", Req::Empty, Resp::Empty),
    route(LAYER, Op::ClearClips, INDEX_ID_SELECTED, Verb::Post, "/clearclips", Req::Empty, Resp::Empty),
    route(LAYER, Op::AddEffect, INDEX_ID_SELECTED, Verb::Post, "/effects/video/add", Req::Text, Resp::Empty),
    route(LAYER, Op::AddEffectAt, INDEX_ID_SELECTED, Verb::Post, "/effects/video/add/{offset}", Req::Text, Resp::Empty),
    route(LAYER, Op::DeleteEffect, INDEX_ID_SELECTED, Verb::Delete, "/effects/video/{offset}", Req::Empty, Resp::Empty),
    // layer groups
    route(GROUP, Op::Get, INDEX_ID_SELECTED, Verb::Get, "", Req::Empty, Resp::Json),
    route(GROUP, Op::Replace, INDEX_ID_SELECTED, Verb::Put, "", Req::Json, Resp::Empty),
    route(GROUP, Op::Delete, INDEX_ID_SELECTED, Verb::Delete, "", Req::Empty, Resp::Empty),
    route(GROUP, Op::Duplicate, INDEX_ID_SELECTED, Verb::Post, "/duplicate", Req::Empty, Resp::Empty),
    route(GROUP, Op::Select, INDEX_ID, Verb::Post, "/select", Req::Empty, Resp::Empty),
    route(GROUP, Op::ResetParameter, INDEX_ID_SELECTED, Verb::Post, "/{parameter}/reset", Req::Json, Resp::Empty),
    route(GROUP, Op::MoveLayer, INDEX_ID_SELECTED, Verb::Post, "/move-layer", Req::Text, Resp::Empty),
    route(GROUP, Op::AddLayer, INDEX_ID_SELECTED, Verb::Post, "/add-layer", Req::OptionalText, Resp::Empty),
    // columns
    route(COLUMN, Op::Get, INDEX_ID, Verb::Get, "", Req::Empty, Resp::Json),
    route(COLUMN, Op::Replace, INDEX_ID, Verb::Put, "", Req::Json, Resp::Empty),
    route(COLUMN, Op::Delete, INDEX_ID, Verb::Delete, "", Req::Empty, Resp::Empty),
    route(COLUMN, Op::Duplicate, INDEX_ID, Verb::Post, "/duplicate", Req::Empty, Resp::Empty),
    route(COLUMN, Op::Select, INDEX_ID, Verb::Post, "/select", Req::Empty, Resp::Empty),
    route(COLUMN, Op::Connect, INDEX_ID, Verb::Post, "/connect", Req::OptionalJson, Resp::Empty),
    route(COLUMN, Op::ResetParameter, INDEX_ID, Verb::Post, "/{parameter}/reset", Req::Json, Resp::Empty),
    // clips
    route(CLIP, Op::Get, CLIP_ALL, Verb::Get, "", Req::Empty, Resp::Json),
    route(CLIP, Op::Replace, CLIP_ALL, Verb::Put, "", Req::Json, Resp::Empty),
    route(CLIP, Op::Select, POSITION_ID, Verb::Post, "/select", Req::Empty, Resp::Empty),
    route(CLIP, Op::Connect, CLIP_ALL, Verb::Post, "/connect", Req::OptionalJson, Resp::Empty),
    route(CLIP, Op::ResetParameter, CLIP_ALL, Verb::Post, "/{parameter}/reset", Req::Json, Resp::Empty),
    route(CLIP, Op::Clear, CLIP_ALL, Verb::Post, "/clear", Req::Empty, Resp::Empty),
    route(CLIP, Op::Open, CLIP_ALL, Verb::Post, "/open", Req::Text, Resp::Empty),
    route(CLIP, Op::AddEffect, CLIP_ALL, Verb::Post, "/effects/video/add", Req::Text, Resp::Empty),
    route(CLIP, Op::AddEffectAt, CLIP_ALL, Verb::Post, "/effects/video/add/{offset}", Req::Text, Resp::Empty),
    route(CLIP, Op::DeleteEffect, CLIP_ALL, Verb::Delete, "/effects/video/{offset}", Req::Empty, Resp::Empty),
    route(CLIP, Op::Thumbnail, POSITION_ID, Verb::Get, "/thumbnail", Req::Empty, Resp::Bytes),
    route(CLIP, Op::SetThumbnail, POSITION_ID, Verb::Post, "/thumbnail", Req::Multipart, Resp::Empty),
    route(CLIP, Op::ResetThumbnail, POSITION_ID, Verb::Delete, "/thumbnail", Req::Empty, Resp::Empty),
];

/// All routes known to the client.
pub fn routes() -> &'static [Route] {
    ROUTES
}

/// A route bound to a concrete path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub route: &'static Route,
    pub path: String,
}

/// Value for a `{name}` slot in a route suffix.
pub type Slot = (&'static str, String);

/// Find the route for `operation` on `scope` and render its path.
///
/// Fails locally when the scope does not offer the operation, the address
/// family is not accepted, an id is negative or a slot is missing.
pub fn resolve(
    scope: Scope,
    address: Option<Address>,
    operation: Operation,
    slots: &[Slot],
) -> Result<Resolved> {
    let family = address.map(|a| a.family()).unwrap_or(Family::Fixed);
    let mut candidates = ROUTES
        .iter()
        .filter(|r| r.scope == scope && r.operation == operation)
        .peekable();
    if candidates.peek().is_none() {
        return Err(Error::InvalidArgument(format!(
            "{operation} is not available for {scope}"
        )));
    }
    let Some(route) = candidates.find(|r| r.families.contains(&family)) else {
        return Err(Error::InvalidArgument(format!(
            "{operation} {scope} does not support {family} addressing"
        )));
    };
    let mut path = base_path(scope, address)?;
    path.push_str(&render_suffix(route.suffix, slots)?);
    Ok(Resolved { route, path })
}

fn base_path(scope: Scope, address: Option<Address>) -> Result<String> {
    if let Some(Address::Id(id)) = address {
        if id < 0 {
            return Err(Error::InvalidArgument(format!(
                "id must be non-negative, got {id}"
            )));
        }
    }
    let path = match (scope, address) {
        (Scope::Product, None) => "/product".to_string(),
        (Scope::Effects, None) => "/effects".to_string(),
        (Scope::Sources, None) => "/sources".to_string(),
        (Scope::Composition, None) => "/composition".to_string(),
        (Scope::Parameter, Some(Address::Id(id))) => format!("/parameter/by-id/{id}"),
        (Scope::Collection(kind), None) => format!("/composition/{}", kind.collection()),
        (Scope::Entity(kind), Some(Address::Index(index))) => {
            format!("/composition/{}/{index}", kind.collection())
        }
        (Scope::Entity(EntityKind::Clip), Some(Address::Position { layer, clip })) => {
            format!("/composition/layers/{layer}/clips/{clip}")
        }
        (Scope::Entity(kind), Some(Address::Id(id))) => {
            format!("/composition/{}/by-id/{id}", kind.collection())
        }
        (Scope::Entity(kind), Some(Address::Selected)) => {
            format!("/composition/{}/selected", kind.collection())
        }
        (scope, address) => {
            let family = address.map(|a| a.family()).unwrap_or(Family::Fixed);
            return Err(Error::InvalidArgument(format!(
                "{scope} cannot be addressed {family}"
            )));
        }
    };
    Ok(path)
}

fn render_suffix(template: &str, slots: &[Slot]) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let Some(len) = rest[start..].find('}') else {
            return Err(Error::InvalidArgument(format!(
                "unterminated slot in route template {template}"
            )));
        };
        let name = &rest[start + 1..start + len];
        let value = slots
            .iter()
            .find(|(slot, _)| *slot == name)
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| Error::InvalidArgument(format!("missing value for {{{name}}}")))?;
        let value = value.trim_matches('/');
        if value.is_empty() {
            return Err(Error::InvalidArgument(format!("{name} must not be empty")));
        }
        push_segments(&mut out, value);
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Append a slot value, escaping each `/`-separated segment so characters
/// such as `#` or `?` stay part of the path.
fn push_segments(out: &mut String, value: &str) {
    for (i, segment) in value.split('/').enumerate() {
        if i > 0 {
            out.push('/');
        }
        out.push_str(&urlencoding::encode(segment));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn path(scope: Scope, address: Option<Address>, op: Operation, slots: &[Slot]) -> String {
        resolve(scope, address, op, slots).unwrap().path
    }

    #[test]
    fn entity_paths_follow_addressing_family() {
        let cases = [
            (DECK, Address::Index(2), "/composition/decks/2"),
            (DECK, Address::Id(1_600_000_000_001), "/composition/decks/by-id/1600000000001"),
            (LAYER, Address::Index(0), "/composition/layers/0"),
            (LAYER, Address::Id(42), "/composition/layers/by-id/42"),
            (LAYER, Address::Selected, "/composition/layers/selected"),
            (GROUP, Address::Index(1), "/composition/layergroups/1"),
            (GROUP, Address::Selected, "/composition/layergroups/selected"),
            (COLUMN, Address::Id(7), "/composition/columns/by-id/7"),
            (CLIP, Address::Position { layer: 3, clip: 5 }, "/composition/layers/3/clips/5"),
            (CLIP, Address::Id(9), "/composition/clips/by-id/9"),
            (CLIP, Address::Selected, "/composition/clips/selected"),
        ];
        for (scope, address, expected) in cases {
            assert_eq!(path(scope, Some(address), Operation::Get, &[]), expected);
        }
    }

    #[test]
    fn suffix_slots_are_filled() {
        assert_eq!(
            path(LAYER, Some(Address::Index(1)), Operation::ResetParameter, &[(
                "parameter",
                "video/opacity".to_string()
            )]),
            "/composition/layers/1/video/opacity/reset"
        );
        assert_eq!(
            path(CLIP, Some(Address::Selected), Operation::AddEffectAt, &[("offset", "2".to_string())]),
            "/composition/clips/selected/effects/video/add/2"
        );
        assert_eq!(
            path(Scope::Composition, None, Operation::SetEffectDisplayName, &[(
                "effect",
                "88".to_string()
            )]),
            "/composition/effects/by-id/88/set-display-name"
        );
        assert_eq!(
            path(Scope::Parameter, Some(Address::Id(5)), Operation::ResetParameter, &[]),
            "/parameter/by-id/5/reset"
        );
        assert_eq!(
            path(Scope::Collection(EntityKind::Column), None, Operation::Add, &[]),
            "/composition/columns/add"
        );
    }

    #[test]
    fn slot_segments_are_escaped() {
        assert_eq!(
            path(Scope::Composition, None, Operation::ResetParameter, &[(
                "parameter",
                "dashboard/Link #1?".to_string()
            )]),
            "/composition/dashboard/Link%20%231%3F/reset"
        );
        assert_eq!(
            path(LAYER, Some(Address::Index(0)), Operation::ResetParameter, &[(
                "parameter",
                "/video/opacity/".to_string()
            )]),
            "/composition/layers/0/video/opacity/reset"
        );
    }

    #[test]
    fn unsupported_family_is_rejected() {
        let err = resolve(DECK, Some(Address::Selected), Operation::Get, &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        let err = resolve(LAYER, Some(Address::Position { layer: 0, clip: 0 }), Operation::Get, &[])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn unavailable_operation_is_rejected() {
        let err = resolve(DECK, Some(Address::Index(0)), Operation::Connect, &[]).unwrap_err();
        assert!(err.to_string().contains("connect is not available for deck"));
    }

    #[test]
    fn negative_id_is_rejected() {
        let err = resolve(CLIP, Some(Address::Id(-1)), Operation::Get, &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn missing_or_empty_slot_is_rejected() {
        assert!(resolve(Scope::Composition, None, Operation::ResetParameter, &[]).is_err());
        assert!(
            resolve(Scope::Composition, None, Operation::ResetParameter, &[(
                "parameter",
                "/".to_string()
            )])
            .is_err()
        );
    }

    #[test]
    fn catalog_rows_are_unambiguous() {
        let mut seen = HashSet::new();
        for route in routes() {
            assert!(!route.families.is_empty(), "{route} has no families");
            for family in route.families {
                assert!(
                    seen.insert((route.scope, route.operation, *family)),
                    "duplicate row for {route} ({family})"
                );
            }
            assert_eq!(
                route.suffix.matches('{').count(),
                route.suffix.matches('}').count(),
                "{route} has malformed suffix"
            );
        }
    }

    #[test]
    fn every_row_resolves_for_each_family() {
        let slots = [
            ("parameter", "master".to_string()),
            ("offset", "0".to_string()),
            ("effect", "1".to_string()),
        ];
        for route in routes() {
            for family in route.families {
                let address = match family {
                    Family::Fixed => None,
                    Family::Index => Some(Address::Index(0)),
                    Family::Position => Some(Address::Position { layer: 0, clip: 0 }),
                    Family::Id => Some(Address::Id(0)),
                    Family::Selected => Some(Address::Selected),
                };
                let resolved = resolve(route.scope, address, route.operation, &slots)
                    .unwrap_or_else(|e| panic!("{route} ({family}): {e}"));
                assert!(resolved.path.starts_with('/'));
                assert!(!resolved.path.contains('{'));
            }
        }
    }
}
