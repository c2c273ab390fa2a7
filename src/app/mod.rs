use crate::pages::LessonPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - `use_query_map()` requires a <Router> context.
    //
    // The editor is served from whatever path the backend mounts it under
    // (e.g. `/editor/index.html`), so every path renders the lesson page.
    view! {
        <Router>
            <Routes fallback=|| view! { <LessonPage /> }>
                <Route path=path!("") view=LessonPage />
            </Routes>
        </Router>
    }
}
