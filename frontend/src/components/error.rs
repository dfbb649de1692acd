use leptos::*;

/// Full-view error placeholder with an optional retry control. Used for
/// fetch-on-load failures; mutation failures go through toasts instead.
#[component]
pub fn ErrorState(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-24 gap-3">
            <svg class="h-10 w-10 text-red-400" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 9v3.75m0 3.75h.008M21 12a9 9 0 11-18 0 9 9 0 0118 0z"/>
            </svg>
            <p class="text-sm text-red-600 font-medium">{message}</p>
            {on_retry.map(|retry| view! {
                <button
                    class="btn-secondary text-xs mt-1"
                    on:click=move |_| retry.call(())
                >
                    "Try again"
                </button>
            })}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn error_state_renders_message() {
        let html = render_to_string(|| view! { <ErrorState message="Employee not found"/> });
        assert!(html.contains("Employee not found"));
        assert!(!html.contains("Try again"));
    }

    #[test]
    fn error_state_renders_retry_control_when_given() {
        let html = render_to_string(|| {
            view! { <ErrorState message="boom" on_retry=Callback::new(|_| {})/> }
        });
        assert!(html.contains("Try again"));
    }
}
