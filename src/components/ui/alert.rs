use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-lg border px-4 py-3 text-sm"}
    clx! {AlertDescription, p, "text-sm [&_p]:leading-relaxed"}
}

#[allow(unused_imports)]
pub use components::*;

/// Inline, non-blocking error line used inside panels.
///
/// `detail` (the underlying error) only shows up as a hover tooltip.
#[component]
pub fn ErrorAlert(
    #[prop(into)] message: String,
    #[prop(into, optional)] detail: String,
) -> impl IntoView {
    view! {
        <Alert class="border-destructive/30" attr:role="alert" attr:title=detail>
            <AlertDescription class="text-destructive">{message}</AlertDescription>
        </Alert>
    }
}
