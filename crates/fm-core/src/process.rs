//! Document preprocessor for inline embedding.
//!
//! Raw exports address rooms by bare underscore ids and tag every shape with
//! the drawing tool's default `cls-1` class. Before a plan is inlined into a
//! page alongside other floors, its ids must be floor-qualified (ids are
//! global to the page) and its room shapes need a stylable class plus a
//! `data-room` attribute the highlighter can target.

/// Rewrite a floor-plan document for inline embedding.
///
/// Every `id="_NNN"` attribute (word characters after the underscore)
/// becomes `id="floorF_NNN" class="room" data-room="NNN"`, and the default
/// `class="cls-1"` becomes `class="room"`. Everything else passes through
/// untouched.
pub fn tag_rooms(svg_text: &str, floor: u32) -> String {
    const MARKER: &str = "id=\"_";

    let mut out = String::with_capacity(svg_text.len() + svg_text.len() / 8);
    let mut rest = svg_text;
    while let Some(pos) = rest.find(MARKER) {
        out.push_str(&rest[..pos]);
        let after_marker = &rest[pos + MARKER.len()..];
        match after_marker.find('"') {
            Some(end) if end > 0 && is_word(&after_marker[..end]) => {
                let name = &after_marker[..end];
                out.push_str(&format!(
                    r#"id="floor{floor}_{name}" class="room" data-room="{name}""#
                ));
                rest = &after_marker[end + 1..];
            }
            _ => {
                out.push_str(MARKER);
                rest = after_marker;
            }
        }
    }
    out.push_str(rest);
    out.replace(r#"class="cls-1""#, r#"class="room""#)
}

fn is_word(s: &str) -> bool {
    s.chars().all(|c| c.is_alphanumeric() || c == '_')
}
