mod dom;
mod fragment;
mod menu;
mod session;

pub(crate) use dom::{is_audio_element, DomHost, LESSON_CONTAINER_ID};
pub(crate) use fragment::{audio_fragment, image_fragment};
pub use menu::ContextMenu;
pub(crate) use session::{DropOutcome, EditorSession, InsertOutcome};

use crate::models::{ContextPoint, ViewportPoint};
use crate::state::EditorContext;
use crate::util::event_target_element;
use leptos::html;
use leptos::logging::{debug_warn, warn};
use leptos::prelude::*;

/// Insert `html` where the user last right-clicked.
///
/// Returns `false` when nothing was inserted (no caret there, or the DOM refused it).
pub(crate) fn insert_at_context(ctx: &EditorContext, html: &str) -> bool {
    let Some(host) = DomHost::current() else {
        return false;
    };

    match ctx.session.with_value(|s| s.insert_at_context(&host, html)) {
        InsertOutcome::Inserted => true,
        InsertOutcome::NoContextPoint => {
            debug_warn!("insert dropped: no context point recorded");
            false
        }
        InsertOutcome::Unresolved => {
            debug_warn!("insert dropped: no caret at the context point");
            false
        }
        InsertOutcome::Failed(e) => {
            warn!("insert failed: {e}");
            false
        }
    }
}

/// `contenteditable` value for the lesson container; absent when read-only.
fn editable_attr(read_only: bool) -> Option<&'static str> {
    (!read_only).then_some("true")
}

/// The editable lesson body.
///
/// Content is injected through `container_ref` (`set_inner_html`), so the view
/// itself renders no children; Leptos never reconciles what the user edits.
/// Read-only only drops `contenteditable`: the menu, inserts and audio moves stay live.
#[component]
pub fn LessonEditor(container_ref: NodeRef<html::Div>) -> impl IntoView {
    let ctx = expect_context::<EditorContext>();

    let on_contextmenu = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ctx.show_menu(ContextPoint {
            page_x: ev.page_x(),
            page_y: ev.page_y(),
            client_x: ev.client_x(),
            client_y: ev.client_y(),
        });
    };

    let on_dragstart = move |ev: web_sys::DragEvent| {
        let Some(el) = event_target_element(&ev) else {
            return;
        };
        let Some(host) = DomHost::current() else {
            return;
        };

        let is_audio = is_audio_element(&el);
        let began = ctx
            .session
            .try_update_value(|s| s.begin_drag(&host, el, is_audio))
            .unwrap_or(false);
        if began {
            if let Some(dt) = ev.data_transfer() {
                dt.set_effect_allowed("move");
            }
        }
    };

    let on_dragover = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        let Some(host) = DomHost::current() else {
            return;
        };

        let point = ViewportPoint {
            x: ev.client_x(),
            y: ev.client_y(),
        };
        let outcome = ctx
            .session
            .try_update_value(|s| s.finish_drop(&host, point))
            .unwrap_or(DropOutcome::NotDragging);

        match outcome {
            DropOutcome::Moved | DropOutcome::NotDragging => {}
            DropOutcome::Unresolved => {
                debug_warn!("drop ignored: no caret under the pointer, audio left in place");
            }
            DropOutcome::Failed(e) => warn!("moving audio failed: {e}"),
        }
    };

    // Fires on the source after any drop; only does work if the drop missed the container.
    let on_dragend = move |_ev: web_sys::DragEvent| {
        if let Some(host) = DomHost::current() {
            ctx.session.update_value(|s| s.cancel_drag(&host));
        }
    };

    view! {
        <div
            id=LESSON_CONTAINER_ID
            class="lesson-container prose max-w-none min-h-[60vh] rounded-md border px-6 py-5 outline-none focus-visible:ring-2 focus-visible:ring-ring/50"
            contenteditable=editable_attr(ctx.read_only)
            spellcheck="true"
            node_ref=container_ref
            on:contextmenu=on_contextmenu
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:drop=on_drop
            on:dragend=on_dragend
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editable_attr_follows_read_only() {
        assert_eq!(editable_attr(false), Some("true"));
        assert_eq!(editable_attr(true), None);
    }
}
