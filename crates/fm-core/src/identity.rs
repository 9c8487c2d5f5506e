//! Room identity: names, descriptions, and split-shape fragment merging.
//!
//! Floor plans exported from drawing tools carry machine ids (`_022`,
//! `main_stairs`, `_022-2`). This module turns those into the canonical
//! record users see: a display name, an always-present description, and the
//! de-suffixed id when a shape is one fragment of a visually split room.

use crate::classify::ShapeIdentity;
use crate::error::ShapeError;
use crate::model::Room;

/// Fixed descriptions for well-known facility identifiers, keyed by the
/// identifier with leading underscores stripped. Lookup is case-insensitive.
const FACILITY_DESCRIPTIONS: &[(&str, &str)] = &[
    ("stairs", "Staircase connecting the floors"),
    ("toilets", "Public restroom"),
    ("toilets_", "Public restroom"),
    ("main_stairs", "Main staircase by the building entrance"),
];

const INSTITUTION: &str = "the University of Hull";

/// Human-readable label for a shape identifier.
///
/// Facility ids map by keyword; anything else becomes `Room NNN`. The same
/// label doubles as the accessible name on the interactive overlay.
pub fn display_name(raw_id: &str) -> String {
    let lower = raw_id.to_ascii_lowercase();
    if lower.contains("stairs") {
        return "Staircase".to_string();
    }
    if lower.contains("toilet") {
        return "Restroom".to_string();
    }
    if lower.contains("elevator") {
        return raw_id.replace('_', " ").trim().to_string();
    }
    format!("Room {}", raw_id.trim_start_matches('_'))
}

/// Description for a room: the fixed facility table, or a generated fallback.
pub fn describe(canonical_id: &str) -> String {
    let key = canonical_id.trim_start_matches('_').to_ascii_lowercase();
    if let Some((_, description)) = FACILITY_DESCRIPTIONS.iter().find(|(name, _)| *name == key) {
        return (*description).to_string();
    }
    if canonical_id.starts_with('_') {
        return format!(
            "Classroom {} at {INSTITUTION}",
            canonical_id.trim_start_matches('_')
        );
    }
    format!("{} facility", display_name(canonical_id))
}

/// Split a raw identifier into its canonical room id and, when the shape is
/// a drawn fragment of a split room, the full fragment id.
///
/// A trailing `-<integer>` marks a fragment: `_022-2` is part of `_022`.
/// The canonical id is everything before the first hyphen.
pub fn split_fragment(raw_id: &str) -> (&str, Option<&str>) {
    if let (Some(first), Some(last)) = (raw_id.find('-'), raw_id.rfind('-')) {
        if raw_id[last + 1..].parse::<u32>().is_ok() {
            return (&raw_id[..first], Some(raw_id));
        }
    }
    (raw_id, None)
}

/// Build the canonical [`Room`] record for one classified shape.
///
/// A failure here is scoped to the shape: the parser logs it and moves on.
pub fn resolve_room(
    identity: &ShapeIdentity<'_>,
    floor: &str,
    path_data: Option<&str>,
    transform: Option<&str>,
    bounding_box: Option<String>,
) -> Result<Room, ShapeError> {
    let raw_id = identity.raw_id().ok_or_else(|| ShapeError {
        raw_id: String::new(),
        reason: "shape carries neither id nor data-name".to_string(),
    })?;
    let (canonical, fragment) = split_fragment(raw_id);
    if canonical.is_empty() {
        return Err(ShapeError {
            raw_id: raw_id.to_string(),
            reason: "fragment id reduces to an empty canonical id".to_string(),
        });
    }

    Ok(Room {
        id: canonical.to_string(),
        name: display_name(canonical),
        floor: floor.to_string(),
        path_data: path_data.map(str::to_string),
        transform: transform.map(str::to_string),
        bounding_box,
        description: describe(canonical),
        alternate_ids: fragment.map(str::to_string).into_iter().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stairs_and_toilets_get_facility_names() {
        assert_eq!(display_name("_main_stairs"), "Staircase");
        assert_eq!(display_name("Stairs_west"), "Staircase");
        assert_eq!(display_name("toilets_"), "Restroom");
    }

    #[test]
    fn elevators_keep_their_id_with_spaces() {
        assert_eq!(display_name("_elevator_2"), "elevator 2");
    }

    #[test]
    fn plain_rooms_are_numbered() {
        assert_eq!(display_name("_022"), "Room 022");
        assert_eq!(display_name("107b"), "Room 107b");
    }

    #[test]
    fn known_facilities_use_the_fixed_table() {
        assert_eq!(describe("_main_stairs"), "Main staircase by the building entrance");
        assert_eq!(describe("Toilets"), "Public restroom");
    }

    #[test]
    fn classroom_fallback_for_underscore_ids() {
        assert_eq!(describe("_022"), "Classroom 022 at the University of Hull");
    }

    #[test]
    fn facility_fallback_for_other_ids() {
        assert_eq!(describe("stairs2"), "Staircase facility");
    }

    #[test]
    fn numeric_suffix_marks_a_fragment() {
        assert_eq!(split_fragment("_022-2"), ("_022", Some("_022-2")));
        assert_eq!(split_fragment("_a-b-3"), ("_a", Some("_a-b-3")));
    }

    #[test]
    fn non_numeric_suffixes_are_not_fragments() {
        assert_eq!(split_fragment("_022"), ("_022", None));
        assert_eq!(split_fragment("elevator-east"), ("elevator-east", None));
        assert_eq!(split_fragment("_022-"), ("_022-", None));
    }

    #[test]
    fn resolve_fills_every_field() {
        let identity = ShapeIdentity::new(Some("_022-2"), None);
        let room = resolve_room(
            &identity,
            "first.svg",
            Some("M10,20 L30,40"),
            Some("translate(1 2)"),
            Some("10,20".to_string()),
        )
        .expect("resolves");

        assert_eq!(room.id, "_022");
        assert_eq!(room.name, "Room 022");
        assert_eq!(room.floor, "first.svg");
        assert_eq!(room.description, "Classroom 022 at the University of Hull");
        assert_eq!(room.alternate_ids.as_slice(), ["_022-2".to_string()]);
        assert_eq!(room.path_data.as_deref(), Some("M10,20 L30,40"));
    }

    #[test]
    fn empty_canonical_id_is_rejected() {
        let identity = ShapeIdentity::new(Some("-2"), None);
        let err = resolve_room(&identity, "first.svg", None, None, None);
        assert!(err.is_err());
    }
}
