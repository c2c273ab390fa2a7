use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, ErrorAlert, Input, Spinner, Textarea,
};
use crate::editor::{audio_fragment, image_fragment, insert_at_context};
use crate::state::{submittable, EditorContext, ImageResults, PanelForm};
use crate::util::alert;
use icons::X;
use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub(crate) const SEARCH_FAILED_MESSAGE: &str = "Error fetching images.";
pub(crate) const NO_IMAGES_MESSAGE: &str = "No images found.";
pub(crate) const AUDIO_FAILED_MESSAGE: &str = "Error generating audio.";

/// Slide-in panel on the right edge; hosts one insert form at a time.
#[component]
pub fn SidePanel() -> impl IntoView {
    let ctx = expect_context::<EditorContext>();

    // Only an open (not a close) rebuilds the form.
    let active_form = Memo::new(move |_| ctx.panel.with(|p| (p.form, p.generation)));

    view! {
        <aside
            id="side-panel"
            class="fixed top-0 z-40 flex h-full w-[400px] max-w-full flex-col border-l bg-background shadow-lg transition-[right] duration-300"
            style:right=move || ctx.panel.with(|p| p.style_right())
            aria-hidden=move || if ctx.panel.with(|p| p.open) { "false" } else { "true" }
        >
            <div class="flex items-center justify-between border-b px-4 py-3">
                <h3 id="panel-title" class="text-sm font-semibold">
                    {move || ctx.panel.with(|p| p.title())}
                </h3>
                <Button
                    variant=ButtonVariant::Ghost
                    size=ButtonSize::Icon
                    attr:id="close-panel"
                    attr:aria-label="Close panel"
                    on:click=move |_| ctx.close_panel()
                >
                    <X />
                </Button>
            </div>

            <div id="panel-content" class="flex-1 overflow-y-auto p-4">
                {move || match active_form.get().0 {
                    Some(PanelForm::Image) => view! { <ImageSearchForm /> }.into_any(),
                    Some(PanelForm::Audio) => view! { <AudioForm /> }.into_any(),
                    None => ().into_any(),
                }}
            </div>
        </aside>
    }
}

#[component]
fn ImageSearchForm() -> impl IntoView {
    let ctx = expect_context::<EditorContext>();
    let query: RwSignal<String> = RwSignal::new(String::new());

    let run_search = move || {
        let Some(q) = submittable(&query.get_untracked()) else {
            return;
        };

        let id = ctx.begin_search();
        let api_client = ctx.api_client.get_value();
        spawn_local(async move {
            let result = api_client.search_images(&q).await;
            if let Err(e) = &result {
                warn!("image search for {q:?} failed ({:?}): {e}", e.kind);
            }
            ctx.finish_search(id, result);
        });
    };

    let pick = move |url: String| {
        insert_at_context(&ctx, &image_fragment(&url));
        ctx.close_panel();
    };

    view! {
        <div class="flex flex-col gap-3">
            <Input
                id="image-search"
                placeholder="Search images..."
                autofocus=true
                bind_value=query
                on_enter=Callback::new(move |_| run_search())
            />
            <Button size=ButtonSize::Sm on:click=move |_| run_search()>"Search"</Button>

            <div id="image-results" class="mt-1 flex flex-col gap-2">
                {move || match ctx.image_results.get() {
                    ImageResults::Idle => ().into_any(),
                    ImageResults::Searching => view! {
                        <p class="inline-flex items-center gap-2 text-xs text-muted-foreground">
                            <Spinner />
                            "Searching..."
                        </p>
                    }
                    .into_any(),
                    ImageResults::NoResults => view! {
                        <p class="text-xs text-muted-foreground">{NO_IMAGES_MESSAGE}</p>
                    }
                    .into_any(),
                    ImageResults::Failed(detail) => view! {
                        <ErrorAlert message=SEARCH_FAILED_MESSAGE detail=detail />
                    }
                    .into_any(),
                    ImageResults::Found(urls) => urls
                        .into_iter()
                        .map(|url| {
                            let src = url.clone();
                            view! {
                                <img
                                    src=src
                                    alt="Search result"
                                    class="my-[5px] w-full cursor-pointer rounded-md hover:ring-2 hover:ring-ring/50"
                                    on:click=move |_| pick(url.clone())
                                />
                            }
                        })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn AudioForm() -> impl IntoView {
    let ctx = expect_context::<EditorContext>();
    let prompt: RwSignal<String> = RwSignal::new(String::new());
    let generating: RwSignal<bool> = RwSignal::new(false);

    let on_generate = move |_| {
        let Some(text) = submittable(&prompt.get_untracked()) else {
            return;
        };

        generating.set(true);
        let api_client = ctx.api_client.get_value();
        spawn_local(async move {
            match api_client.generate_audio(&text).await {
                Ok(res) => {
                    insert_at_context(&ctx, &audio_fragment(&res.audio_url));
                    ctx.close_panel();
                }
                Err(e) => {
                    warn!("audio generation failed ({:?}): {e}", e.kind);
                    alert(AUDIO_FAILED_MESSAGE);
                }
            }
            generating.set(false);
        });
    };

    view! {
        <div class="flex flex-col gap-3">
            <Textarea
                id="audio-text"
                rows=3
                placeholder="Enter text for audio..."
                bind_value=prompt
            />
            <Button
                size=ButtonSize::Sm
                attr:disabled=move || generating.get()
                on:click=on_generate
            >
                <span class="inline-flex items-center gap-2">
                    <Show when=move || generating.get() fallback=|| ().into_view()>
                        <Spinner />
                    </Show>
                    {move || if generating.get() { "Generating..." } else { "Generate Audio" }}
                </span>
            </Button>
        </div>
    }
}
