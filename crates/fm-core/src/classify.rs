//! Shape classification: which vector shapes in a floor plan are rooms.
//!
//! Floor-plan SVGs mix room outlines with decorative geometry (walls, icons,
//! furniture). Rooms follow an id convention: a leading underscore, or a
//! facility keyword for stairs, restrooms, and elevators. The parser and the
//! live interaction binder both go through this predicate, so the extracted
//! metadata and the interactive surface always agree on which shapes count.

/// Keywords marking a shape as a special facility rather than a numbered room.
pub const FACILITY_KEYWORDS: [&str; 3] = ["stairs", "toilet", "elevator"];

/// The two identifier candidates a shape element can carry.
///
/// Vector editors write the room identifier to `id`, to `data-name`, or to
/// both. Resolved once per shape; blank attributes count as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeIdentity<'a> {
    pub id: Option<&'a str>,
    pub data_name: Option<&'a str>,
}

impl<'a> ShapeIdentity<'a> {
    pub fn new(id: Option<&'a str>, data_name: Option<&'a str>) -> Self {
        let non_blank = |v: Option<&'a str>| v.filter(|s| !s.trim().is_empty());
        Self {
            id: non_blank(id),
            data_name: non_blank(data_name),
        }
    }

    /// The identifier used for the room record: `id` wins over `data-name`.
    pub fn raw_id(&self) -> Option<&'a str> {
        self.id.or(self.data_name)
    }
}

/// Whether the shape represents a room or facility rather than decoration.
pub fn is_room_shape(identity: &ShapeIdentity<'_>) -> bool {
    if identity.id.is_some_and(|id| id.starts_with('_')) {
        return true;
    }
    if identity.data_name.is_some_and(|name| name.starts_with('_')) {
        return true;
    }
    identity.id.is_some_and(|id| {
        let lower = id.to_ascii_lowercase();
        FACILITY_KEYWORDS.iter().any(|kw| lower.contains(kw))
    })
}
