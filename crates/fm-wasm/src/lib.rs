//! WASM bridge for FM: exposes floor-plan extraction and the interactive
//! room overlay to JavaScript hosts.
//!
//! Compiled via `wasm-pack build --target web`. Two surfaces: [`parse_rooms`]
//! turns raw SVG text into room metadata for picker/search UIs, and
//! [`RoomBinder`] wires pointer behavior and highlighting into the live
//! document the browser renders.

mod binder;

pub use binder::{MapHost, RoomBinder};

use wasm_bindgen::prelude::*;

/// Parse a floor-plan document and return its rooms as JSON.
/// Returns `{"ok":true,"rooms":[...]}` or `{"ok":false,"error":"..."}`.
#[wasm_bindgen]
pub fn parse_rooms(source: &str, floor: &str) -> String {
    panic_hook_setup();
    match fm_core::parse_rooms(source, floor) {
        Ok(rooms) => match serde_json::to_string(&rooms) {
            Ok(json) => format!(r#"{{"ok":true,"rooms":{json}}}"#),
            Err(e) => format!(r#"{{"ok":false,"error":"Serialization error: {e}"}}"#),
        },
        Err(e) => {
            let escaped = e.to_string().replace('\\', "\\\\").replace('"', "\\\"");
            format!(r#"{{"ok":false,"error":"{escaped}"}}"#)
        }
    }
}

pub(crate) fn panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("FM WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_envelope_carries_rooms() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg"><path id="_022" d="M10,20"/></svg>"##;
        let out = parse_rooms(svg, "first.svg");
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(value["ok"], true);
        assert_eq!(value["rooms"][0]["id"], "_022");
        assert_eq!(value["rooms"][0]["boundingBox"], "10,20");
    }

    #[test]
    fn json_envelope_reports_document_errors() {
        let out = parse_rooms("<svg><path", "second.svg");
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
        assert_eq!(value["ok"], false);
        let message = value["error"].as_str().expect("error string");
        assert!(message.contains("second.svg"));
    }
}
