use crate::api::ApiClient;
use crate::components::ui::Spinner;
use crate::editor::{ContextMenu, LessonEditor};
use crate::models::LessonParams;
use crate::panel::SidePanel;
use crate::state::{EditorContext, LessonContent};
use leptos::html;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

/// `?file=<name>&readonly=true`
#[component]
pub fn LessonPage() -> impl IntoView {
    // Read once: the page is rebuilt on navigation, not re-parameterised.
    let query = use_query_map();
    let params = query.with_untracked(|q| LessonParams::from_query(q.get("file"), q.get("readonly")));

    let ctx = EditorContext::new(ApiClient::from_env(), params.read_only);
    provide_context(ctx);

    let container_ref: NodeRef<html::Div> = NodeRef::new();
    let content: RwSignal<Option<LessonContent>> = RwSignal::new(None);
    let loading: RwSignal<bool> = RwSignal::new(false);

    if let Some(file) = params.file.clone() {
        loading.set(true);
        let api_client = ctx.api_client.get_value();
        spawn_local(async move {
            let result = api_client.fetch_markdown(&file).await;
            if let Err(e) = &result {
                warn!("failed to load lesson {file:?} ({:?}): {e}", e.kind);
            }
            content.set(Some(LessonContent::from_load(result)));
            loading.set(false);
        });
    }

    // Push loaded content into the editable container once both exist.
    Effect::new(move |_| {
        let Some(el) = container_ref.get() else {
            return;
        };
        match content.get() {
            Some(LessonContent::Html(html)) => el.set_inner_html(&html),
            Some(LessonContent::Error(msg)) => el.set_inner_text(&msg),
            None => {}
        }
    });

    let title = params.file.clone().unwrap_or_else(|| "Untitled lesson".to_string());

    view! {
        <div class="min-h-screen bg-background">
            <main class="mx-auto w-full max-w-[900px] px-4 py-8">
                <div class="mb-4 flex items-center justify-between">
                    <div class="space-y-1">
                        <h1 class="text-xl font-semibold">"Lesson Editor"</h1>
                        <p class="text-xs text-muted-foreground">{title}</p>
                    </div>

                    <div class="flex items-center gap-2 text-xs text-muted-foreground">
                        <Show when=move || loading.get() fallback=|| ().into_view()>
                            <span class="inline-flex items-center gap-2">
                                <Spinner />
                                "Loading..."
                            </span>
                        </Show>
                        <Show when=move || ctx.read_only fallback=|| ().into_view()>
                            <span class="rounded-md border px-2 py-0.5">"Read-only"</span>
                        </Show>
                    </div>
                </div>

                <LessonEditor container_ref=container_ref />
            </main>

            <ContextMenu />
            <SidePanel />
        </div>
    }
}
