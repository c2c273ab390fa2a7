use crate::components::ui::{Button, ButtonVariant};
use crate::state::{EditorContext, PanelForm};
use icons::{ImagePlus, Music};
use leptos::ev;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;

/// Floating menu shown at the last right-click inside the lesson container.
#[component]
pub fn ContextMenu() -> impl IntoView {
    let ctx = expect_context::<EditorContext>();

    // Any click anywhere hides the menu, including clicks on the menu itself.
    let click_handle = window_event_listener(ev::click, move |_ev: web_sys::MouseEvent| {
        ctx.hide_menu();
    });

    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ctx.hide_menu();
            ctx.close_panel();
        }
    });

    on_cleanup(move || {
        click_handle.remove();
        key_handle.remove();
    });

    let visible = move || ctx.menu.with(|m| m.is_some());

    view! {
        <div
            id="context-menu"
            role="menu"
            class="absolute z-50 min-w-44 rounded-md border bg-popover p-1 text-popover-foreground shadow-md"
            style:display=move || if visible() { "block" } else { "none" }
            style:top=move || ctx.menu.with(|m| m.map(|p| p.style_top()).unwrap_or_default())
            style:left=move || ctx.menu.with(|m| m.map(|p| p.style_left()).unwrap_or_default())
        >
            <Button
                variant=ButtonVariant::Menu
                attr:id="insert-image"
                attr:role="menuitem"
                on:click=move |_| ctx.open_panel(PanelForm::Image)
            >
                <ImagePlus />
                "Insert Image"
            </Button>
            <Button
                variant=ButtonVariant::Menu
                attr:id="insert-audio"
                attr:role="menuitem"
                on:click=move |_| ctx.open_panel(PanelForm::Audio)
            >
                <Music />
                "Insert Audio"
            </Button>
        </div>
    }
}
