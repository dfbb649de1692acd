use leptos::*;

#[component]
pub fn Spinner(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-block h-5 w-5 animate-spin rounded-full border-2 border-current border-t-transparent text-blue-500 {}",
            class
        )></span>
    }
}

/// Full-view loading placeholder shown while a page's initial fetch is in flight.
#[component]
pub fn LoadingState(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let message = message.unwrap_or_else(|| "Loading...".to_string());
    view! {
        <div class="flex flex-col items-center justify-center py-24 gap-3">
            <Spinner class="h-8 w-8"/>
            <p class="text-sm text-gray-500">{message}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn loading_state_uses_default_message() {
        let html = render_to_string(|| view! { <LoadingState/> });
        assert!(html.contains("Loading..."));
    }

    #[test]
    fn loading_state_renders_custom_message() {
        let html =
            render_to_string(|| view! { <LoadingState message="Loading employees..."/> });
        assert!(html.contains("Loading employees..."));
    }
}
