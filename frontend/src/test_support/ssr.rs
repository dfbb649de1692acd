use leptos::*;

/// Runs `f` inside a fresh reactive runtime and disposes it afterwards.
pub fn with_runtime(f: impl FnOnce()) {
    let runtime = create_runtime();
    f();
    runtime.dispose();
}

/// Server-side render for host tests. Resource loading is suppressed so
/// components render their initial state without touching the network.
pub fn render_to_string<F, N>(f: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos_reactive::suppress_resource_load(true);
    leptos::ssr::render_to_string(f).to_string()
}
