//! SVG floor-plan parser: document text → ordered room records.
//!
//! Walks every `path` element of the document, keeps the ones the classifier
//! accepts, and resolves each into a [`Room`]. A shape that fails to resolve
//! is logged and skipped; only a document that is not well-formed markup
//! fails the whole parse.

use crate::classify::{ShapeIdentity, is_room_shape};
use crate::error::ParseError;
use crate::geometry::estimate_bounds;
use crate::identity::resolve_room;
use crate::model::Room;

/// Parse one floor-plan document into its room records, in document order.
///
/// # Errors
/// [`ParseError::Document`] when the text is not well-formed markup. No
/// partial result is returned in that case.
pub fn parse_rooms(document_text: &str, floor_id: &str) -> Result<Vec<Room>, ParseError> {
    let doc =
        roxmltree::Document::parse(document_text).map_err(|source| ParseError::Document {
            floor: floor_id.to_string(),
            source,
        })?;

    let mut rooms: Vec<Room> = Vec::new();
    for node in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "path")
    {
        let identity = ShapeIdentity::new(node.attribute("id"), node.attribute("data-name"));
        if !is_room_shape(&identity) {
            continue;
        }

        let bounds = estimate_bounds(
            node.attribute("bounds")
                .or_else(|| node.attribute("data-bounds")),
            node.attribute("d"),
        );
        match resolve_room(
            &identity,
            floor_id,
            node.attribute("d"),
            node.attribute("transform"),
            bounds,
        ) {
            Ok(room) => merge_or_push(&mut rooms, room),
            Err(err) => log::warn!("skipping shape on floor {floor_id}: {err}"),
        }
    }
    Ok(rooms)
}

/// Fold a resolved room into the output, keeping canonical ids unique.
///
/// A fragment whose base room was already emitted adds its raw id to that
/// room's alternates. An exact duplicate id is dropped. Anything else opens
/// a new record. No coalescing happens beyond the hyphen-suffix rule.
fn merge_or_push(rooms: &mut Vec<Room>, room: Room) {
    let Some(index) = rooms.iter().position(|r| r.id == room.id) else {
        rooms.push(room);
        return;
    };
    if room.alternate_ids.is_empty() {
        log::debug!("duplicate shape id `{}` ignored", room.id);
        return;
    }
    let existing = &mut rooms[index];
    for alt in room.alternate_ids {
        if !existing.alternate_ids.contains(&alt) {
            existing.alternate_ids.push(alt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FLOOR: &str = "first.svg";

    fn svg(body: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">{body}</svg>"#
        )
    }

    #[test]
    fn plain_rooms_come_out_in_document_order() {
        let doc = svg(
            r##"<path id="_022" d="M10,20 L30,40"/>
                <path id="cls-1" d="M0,0"/>
                <path id="_017" d="M50,60 L70,80"/>"##,
        );
        let rooms = parse_rooms(&doc, FLOOR).expect("parses");
        let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["_022", "_017"]);
        assert!(rooms.iter().all(|r| r.alternate_ids.is_empty()));
        assert!(rooms.iter().all(|r| r.floor == FLOOR));
    }

    #[test]
    fn fragments_merge_into_the_base_room() {
        let doc = svg(
            r##"<path id="_022" d="M10,20"/>
                <path id="_022-2" d="M90,90"/>"##,
        );
        let rooms = parse_rooms(&doc, FLOOR).expect("parses");
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, "_022");
        assert_eq!(rooms[0].alternate_ids.as_slice(), ["_022-2".to_string()]);
    }

    #[test]
    fn orphan_fragment_opens_a_record_under_its_canonical_id() {
        let doc = svg(r##"<path id="_031-2" d="M5,5"/><path id="_031-3" d="M6,6"/>"##);
        let rooms = parse_rooms(&doc, FLOOR).expect("parses");
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, "_031");
        assert_eq!(
            rooms[0].alternate_ids.as_slice(),
            ["_031-2".to_string(), "_031-3".to_string()]
        );
    }

    #[test]
    fn data_name_shapes_are_extracted() {
        let doc = svg(r##"<path data-name="_104" d="M1,1"/>"##);
        let rooms = parse_rooms(&doc, FLOOR).expect("parses");
        assert_eq!(rooms[0].id, "_104");
    }

    #[test]
    fn facility_shapes_get_names_and_descriptions() {
        let doc = svg(r##"<path id="_main_stairs" d="M1,1"/>"##);
        let rooms = parse_rooms(&doc, FLOOR).expect("parses");
        assert_eq!(rooms[0].name, "Staircase");
        assert_eq!(rooms[0].description, "Main staircase by the building entrance");
    }

    #[test]
    fn geometry_is_attached_best_effort() {
        let doc = svg(
            r##"<path id="_1" d="M10,20 L30,40"/>
                <path id="_2" data-bounds="0 0 9 9" d="M10,20"/>
                <path id="_3"/>"##,
        );
        let rooms = parse_rooms(&doc, FLOOR).expect("parses");
        assert_eq!(rooms[0].bounding_box.as_deref(), Some("10,20"));
        assert_eq!(rooms[1].bounding_box.as_deref(), Some("0 0 9 9"));
        assert_eq!(rooms[2].bounding_box, None);
    }

    #[test]
    fn malformed_markup_is_fatal_and_names_the_floor() {
        let err = parse_rooms("<svg><path id=\"_1\"", "third.svg").unwrap_err();
        let ParseError::Document { floor, .. } = err;
        assert_eq!(floor, "third.svg");
    }

    #[test]
    fn one_bad_shape_does_not_abort_the_parse() {
        // `-2` passes classification via data-name but resolves to an
        // empty canonical id; the surrounding shapes still come through.
        let doc = svg(
            r##"<path id="_022" d="M1,1"/>
                <path id="-2" data-name="_orphan-2"/>
                <path id="_017" d="M2,2"/>"##,
        );
        let rooms = parse_rooms(&doc, FLOOR).expect("parses");
        let ids: Vec<&str> = rooms.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["_022", "_017"]);
    }

    #[test]
    fn duplicate_plain_ids_keep_the_first_record() {
        let doc = svg(r##"<path id="_022" d="M1,1"/><path id="_022" d="M9,9"/>"##);
        let rooms = parse_rooms(&doc, FLOOR).expect("parses");
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].path_data.as_deref(), Some("M1,1"));
        assert!(rooms[0].alternate_ids.is_empty());
    }
}
