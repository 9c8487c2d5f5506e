//! Canonical room metadata extracted from a floor-plan document.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One room (or special facility) on one floor.
///
/// Produced by the parser, immutable afterwards: downstream consumers read,
/// they never patch a record in place. Serialized with the camelCase field
/// names the hosting application's JS side expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Canonical identifier, unique within one parsed floor.
    pub id: String,
    /// Human-readable label derived from the id or facility type.
    pub name: String,
    /// Identifier of the floor-plan document this room belongs to.
    pub floor: String,
    /// Raw path geometry copied from the source shape.
    pub path_data: Option<String>,
    /// Coordinate transform applied to the shape, if any.
    pub transform: Option<String>,
    /// Estimated bounding box or anchor point, best-effort.
    pub bounding_box: Option<String>,
    /// Always populated; falls back to a generated description.
    pub description: String,
    /// Raw identifiers of shape fragments merged into this room,
    /// in discovery order. Never contains `id` itself.
    #[serde(default)]
    pub alternate_ids: SmallVec<[String; 2]>,
}

impl Room {
    /// The room number shown to users: the id without its underscore prefix.
    pub fn room_number(&self) -> &str {
        self.id.trim_start_matches('_')
    }

    /// Display name of the floor this room sits on.
    pub fn floor_name(&self) -> &'static str {
        match self.floor.as_str() {
            "first.svg" => "First Floor",
            "second.svg" => "Second Floor",
            "third.svg" => "Third Floor",
            _ => "Unknown Floor",
        }
    }
}

/// Case-insensitive room lookup over one floor's parse output.
pub fn find_room<'a>(rooms: &'a [Room], id: &str) -> Option<&'a Room> {
    rooms.iter().find(|room| room.id.eq_ignore_ascii_case(id))
}
