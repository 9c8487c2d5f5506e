//! Interaction binding for a live floor-plan document.
//!
//! The parser reads a static string; this module works against the mutable
//! document tree the browser actually renders. It attaches pointer and
//! keyboard behavior to every shape the classifier accepts, reports
//! interactions to a host callback object, and drives the highlight state
//! machine: at most one element is highlighted at a time, and the pulse
//! phase of a highlight expires on its own 2-second timer.
//!
//! Listener handles live in an explicit side table keyed by element
//! identity, so re-binding after the host swaps the document never stacks
//! duplicate listeners and `unbind` can detach everything synchronously.

use std::cell::RefCell;
use std::rc::Rc;

use fm_core::classify::{ShapeIdentity, is_room_shape};
use fm_core::identity::display_name;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, HtmlObjectElement, KeyboardEvent, Node, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, SvgElement,
};

const HIGHLIGHT_CLASS: &str = "room-highlight";
const PULSE_CLASS: &str = "room-highlight-pulse";
const PULSE_MS: u32 = 2_000;

/// Selector for candidate shapes; the classifier filters the rest.
const SHAPE_SELECTOR: &str = "path[id], path[data-name]";

#[wasm_bindgen]
extern "C" {
    /// Host-side callback sink for room interaction events.
    pub type MapHost;

    #[wasm_bindgen(method, js_name = onRoomActivated)]
    pub fn on_room_activated(this: &MapHost, room_id: &str);

    #[wasm_bindgen(method, js_name = onRoomHoverEnter)]
    pub fn on_room_hover_enter(this: &MapHost, room_id: &str);

    #[wasm_bindgen(method, js_name = onRoomHoverLeave)]
    pub fn on_room_hover_leave(this: &MapHost);

    #[wasm_bindgen(method, js_name = onLoadFailed)]
    pub fn on_load_failed(this: &MapHost, reason: &str);
}

/// One bound shape: the element and the listener handles keeping it live.
/// Dropping the handles detaches the listeners.
struct BoundShape {
    element: Element,
    _listeners: Vec<EventListener>,
}

struct BinderState {
    host: MapHost,
    bindings: Vec<BoundShape>,
    /// Load/error listeners parked on a not-yet-loaded `<object>`.
    /// Cleared by `unbind` and by every new `bind`, so a stale load signal
    /// can never re-attach listeners.
    pending_load: Vec<EventListener>,
    /// Bumped on every `highlight` call; a pulse timer only clears the
    /// pulse mark if the generation it captured is still current.
    pulse_generation: u64,
    pulse_timer: Option<Timeout>,
}

/// Binds room shapes in a live document to host callbacks and manages
/// highlight state. One binder serves one document root at a time;
/// re-run [`RoomBinder::bind`] after the host replaces the document.
#[wasm_bindgen]
pub struct RoomBinder {
    inner: Rc<RefCell<BinderState>>,
}

#[wasm_bindgen]
impl RoomBinder {
    #[wasm_bindgen(constructor)]
    pub fn new(host: MapHost) -> Self {
        crate::panic_hook_setup();
        Self {
            inner: Rc::new(RefCell::new(BinderState {
                host,
                bindings: Vec::new(),
                pending_load: Vec::new(),
                pulse_generation: 0,
                pulse_timer: None,
            })),
        }
    }

    /// Attach interaction behavior to every room shape under `root`.
    ///
    /// `root` is either an `<object>` embedding the floor plan or the inline
    /// document subtree itself. An `<object>` that has not finished loading
    /// defers the scan until its load signal; a load failure is reported
    /// through the host instead. Safe to call repeatedly: each shape ends up
    /// with exactly one set of listeners.
    pub fn bind(&self, root: &Element) {
        self.inner.borrow_mut().pending_load.clear();

        if let Some(object) = root.dyn_ref::<HtmlObjectElement>() {
            if object.content_document().is_some() {
                if let Some(content) = resolve_content(root) {
                    scan_and_bind(&self.inner, &content);
                }
            } else {
                self.defer_until_load(object);
            }
            return;
        }
        scan_and_bind(&self.inner, root);
    }

    /// Move the highlight to `room_id`, clearing any previous highlight.
    ///
    /// The element gets a persistent highlight mark and a pulse mark that
    /// expires after two seconds. An unknown id is not an error: the
    /// previous highlight is still cleared and nothing new is set.
    pub fn highlight(&self, root: &Element, room_id: &str, scroll_into_view: bool) {
        {
            let mut state = self.inner.borrow_mut();
            state.pulse_generation += 1;
            state.pulse_timer = None;
        }

        let Some(content) = resolve_content(root) else {
            return;
        };
        clear_highlight_marks(&content);

        let Some(element) = find_room_element(&content, room_id) else {
            return;
        };
        let _ = element.class_list().add_2(HIGHLIGHT_CLASS, PULSE_CLASS);
        self.schedule_pulse_removal(&element);

        if scroll_into_view {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Center);
            options.set_inline(ScrollLogicalPosition::Center);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }

    /// Detach every listener attached by a prior [`RoomBinder::bind`] on
    /// elements currently under `root`, and cancel any deferred binding.
    /// No-op when nothing is bound.
    pub fn unbind(&self, root: &Element) {
        let mut state = self.inner.borrow_mut();
        state.pending_load.clear();
        match resolve_content(root) {
            Some(content) => state.bindings.retain(|bound| {
                let node: &Node = &bound.element;
                !content.contains(Some(node))
            }),
            None => state.bindings.clear(),
        }
    }
}

impl RoomBinder {
    /// Park one-shot load/error listeners on a still-loading `<object>`.
    fn defer_until_load(&self, object: &HtmlObjectElement) {
        let inner = Rc::clone(&self.inner);
        let object_for_load = object.clone();
        let load = EventListener::once(object, "load", move |_event| {
            match object_for_load
                .content_document()
                .and_then(|doc| doc.document_element())
            {
                Some(content) => scan_and_bind(&inner, &content),
                None => inner
                    .borrow()
                    .host
                    .on_load_failed("document loaded without readable content"),
            }
        });

        let inner = Rc::clone(&self.inner);
        let error = EventListener::once(object, "error", move |_event| {
            inner
                .borrow()
                .host
                .on_load_failed("floor plan document failed to load");
        });

        self.inner
            .borrow_mut()
            .pending_load
            .extend([load, error]);
    }

    /// Schedule removal of the pulse mark, guarded by the current generation
    /// so a stale timer never touches a newer highlight.
    fn schedule_pulse_removal(&self, element: &Element) {
        let generation = self.inner.borrow().pulse_generation;
        let inner = Rc::clone(&self.inner);
        let target = element.clone();
        let timer = Timeout::new(PULSE_MS, move || {
            if inner.borrow().pulse_generation == generation {
                let _ = target.class_list().remove_1(PULSE_CLASS);
            }
        });
        self.inner.borrow_mut().pulse_timer = Some(timer);
    }
}

/// The element subtree holding the floor-plan shapes: the content document
/// root for an `<object>` embed, the element itself otherwise. `None` when
/// an embed has no readable content (not loaded, or cross-origin).
fn resolve_content(root: &Element) -> Option<Element> {
    if let Some(object) = root.dyn_ref::<HtmlObjectElement>() {
        return object.content_document()?.document_element();
    }
    Some(root.clone())
}

/// Find room shapes under `content` and bind each one.
fn scan_and_bind(inner: &Rc<RefCell<BinderState>>, content: &Element) {
    let shapes = match content.query_selector_all(SHAPE_SELECTOR) {
        Ok(list) => list,
        Err(_) => {
            log::warn!("room shape query failed; overlay left unbound");
            return;
        }
    };

    for index in 0..shapes.length() {
        let Some(node) = shapes.item(index) else {
            continue;
        };
        let Some(element) = node.dyn_ref::<Element>() else {
            continue;
        };
        let id_attr = element.get_attribute("id");
        let name_attr = element.get_attribute("data-name");
        let identity = ShapeIdentity::new(id_attr.as_deref(), name_attr.as_deref());
        if !is_room_shape(&identity) {
            continue;
        }
        if let Some(raw_id) = identity.raw_id() {
            bind_shape(inner, element, raw_id);
        }
    }
}

/// Detach any previous listeners for this exact element, then attach a
/// fresh set and record it in the side table.
fn bind_shape(inner: &Rc<RefCell<BinderState>>, element: &Element, raw_id: &str) {
    {
        let mut state = inner.borrow_mut();
        state.bindings.retain(|bound| bound.element != *element);
    }

    let _ = element.set_attribute("role", "button");
    let _ = element.set_attribute("tabindex", "0");
    let _ = element.set_attribute("aria-label", &display_name(raw_id));
    if let Some(svg_element) = element.dyn_ref::<SvgElement>() {
        let _ = svg_element.style().set_property("cursor", "pointer");
    }

    let host = inner.borrow().host.clone();
    let listeners = attach_listeners(element, raw_id, &host);
    inner.borrow_mut().bindings.push(BoundShape {
        element: element.clone(),
        _listeners: listeners,
    });
}

fn attach_listeners(element: &Element, raw_id: &str, host: &MapHost) -> Vec<EventListener> {
    let id = raw_id.to_string();
    let host_for_click = host.clone();
    let click = EventListener::new(element, "click", move |_event| {
        host_for_click.on_room_activated(&id);
    });

    // Keyboard equivalent of activation for the button role.
    let id = raw_id.to_string();
    let host_for_key = host.clone();
    let keydown = EventListener::new(element, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key = event.key();
        if key == "Enter" || key == " " {
            event.prevent_default();
            host_for_key.on_room_activated(&id);
        }
    });

    let id = raw_id.to_string();
    let host_for_enter = host.clone();
    let enter = EventListener::new(element, "mouseenter", move |_event| {
        host_for_enter.on_room_hover_enter(&id);
    });

    let host_for_leave = host.clone();
    let leave = EventListener::new(element, "mouseleave", move |_event| {
        host_for_leave.on_room_hover_leave();
    });

    vec![click, keydown, enter, leave]
}

/// Remove highlight and pulse marks from every element carrying one.
fn clear_highlight_marks(content: &Element) {
    let marked = match content.query_selector_all(&format!(".{HIGHLIGHT_CLASS}, .{PULSE_CLASS}")) {
        Ok(list) => list,
        Err(_) => return,
    };
    for index in 0..marked.length() {
        let Some(node) = marked.item(index) else {
            continue;
        };
        if let Some(element) = node.dyn_ref::<Element>() {
            let _ = element.class_list().remove_2(HIGHLIGHT_CLASS, PULSE_CLASS);
        }
    }
}

/// Locate a room element by id, falling back to the `data-room` attribute
/// written by the inline-embedding preprocessor.
fn find_room_element(content: &Element, room_id: &str) -> Option<Element> {
    if let Some(document) = content.owner_document() {
        if let Some(element) = document.get_element_by_id(room_id) {
            return Some(element);
        }
    }
    let selector = format!("[data-room=\"{room_id}\"]");
    content.query_selector(&selector).ok().flatten()
}
