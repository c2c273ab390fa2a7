use super::fragment::DRAGGING_CLASS;
use super::session::{HostError, InsertionHost};
use crate::models::ViewportPoint;
use leptos::logging::debug_warn;
use wasm_bindgen::{JsCast, JsValue};

pub(crate) const LESSON_CONTAINER_ID: &str = "lesson-container";

/// `InsertionHost` backed by the live browser document.
///
/// Insertion points are confined to `container`.
pub(crate) struct DomHost {
    document: web_sys::Document,
    container: web_sys::Element,
}

impl DomHost {
    pub fn new(document: web_sys::Document, container: web_sys::Element) -> Self {
        Self {
            document,
            container,
        }
    }

    /// The host for the mounted lesson container, if there is one.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let container = document.get_element_by_id(LESSON_CONTAINER_ID)?;
        Some(Self::new(document, container))
    }

    /// Blink/WebKit: non-standard `document.caretRangeFromPoint`.
    ///
    /// `None` when the browser lacks the method; `Some(None)` when it has it but
    /// there is no caret at the point.
    fn caret_range_from_point(&self, x: i32, y: i32) -> Option<Option<web_sys::Range>> {
        let f = js_sys::Reflect::get(&self.document, &"caretRangeFromPoint".into()).ok()?;
        let f = f.dyn_into::<js_sys::Function>().ok()?;
        let range = f
            .call2(&self.document, &JsValue::from(x), &JsValue::from(y))
            .ok()
            .and_then(|v| v.dyn_into::<web_sys::Range>().ok());
        Some(range)
    }

    /// Standard `document.caretPositionFromPoint`, turned into a collapsed range.
    fn caret_position_range(&self, x: i32, y: i32) -> Option<web_sys::Range> {
        let pos = self.document.caret_position_from_point(x as f32, y as f32)?;
        let node = pos.offset_node()?;
        let range = self.document.create_range().ok()?;
        range.set_start(&node, pos.offset()).ok()?;
        Some(range)
    }
}

fn host_error(e: JsValue) -> HostError {
    let message = e
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| e.as_string())
        .unwrap_or_else(|| format!("{e:?}"));
    HostError::new(message)
}

impl InsertionHost for DomHost {
    type Target = web_sys::Range;
    type Node = web_sys::Element;

    fn resolve_insertion_point(&self, point: ViewportPoint) -> Option<web_sys::Range> {
        match self.caret_range_from_point(point.x, point.y) {
            Some(range) => range,
            None => self.caret_position_range(point.x, point.y),
        }
    }

    fn within_editor(&self, target: &web_sys::Range) -> bool {
        target
            .start_container()
            .map(|node| self.container.contains(Some(&node)))
            .unwrap_or(false)
    }

    fn insert_fragment(&self, target: &web_sys::Range, html: &str) -> Result<(), HostError> {
        let frag = target.create_contextual_fragment(html).map_err(host_error)?;
        target.insert_node(&frag).map_err(host_error)
    }

    fn relocate(&self, target: &web_sys::Range, node: &web_sys::Element) -> Result<(), HostError> {
        // insertNode on an attached node detaches it from its old parent first.
        target.insert_node(node).map_err(host_error)
    }

    fn mark_dragging(&self, node: &web_sys::Element, dragging: bool) {
        let classes = node.class_list();
        let result = if dragging {
            classes.add_1(DRAGGING_CLASS)
        } else {
            classes.remove_1(DRAGGING_CLASS)
        };
        if let Err(e) = result {
            debug_warn!("toggling the dragging marker failed: {}", host_error(e));
        }
    }
}

pub(crate) fn is_audio_element(el: &web_sys::Element) -> bool {
    el.tag_name().eq_ignore_ascii_case("audio")
}
