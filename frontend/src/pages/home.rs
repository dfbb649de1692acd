use leptos::*;
use leptos_router::Redirect;

/// The root path just forwards to the dashboard.
#[component]
pub fn HomePage() -> impl IntoView {
    view! { <Redirect path="/dashboard"/> }
}
