//! Best-effort bounding geometry for room shapes.

/// Derive a bounding-box string for a shape.
///
/// Priority: an explicit `bounds`/`data-bounds` attribute value is returned
/// verbatim; otherwise the anchor point of the last move-to command in the
/// path data, formatted `"x,y"`. Returns `None` when neither is usable.
///
/// The fallback is an anchor-point approximation, not a real bounding box.
/// Callers must treat the result as hint metadata, never exact geometry.
pub fn estimate_bounds(explicit: Option<&str>, path_data: Option<&str>) -> Option<String> {
    if let Some(bounds) = explicit {
        if !bounds.trim().is_empty() {
            return Some(bounds.to_string());
        }
    }
    anchor_point(path_data?)
}

/// First coordinate pair after the last `M` command, as `"x,y"`.
fn anchor_point(path_data: &str) -> Option<String> {
    let after_move = &path_data[path_data.rfind('M')? + 1..];
    let token = after_move.split_whitespace().next()?;
    let (x, y) = token.split_once(',')?;
    Some(format!("{},{}", x.trim(), y.trim()))
}
