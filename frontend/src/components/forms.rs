use leptos::*;

/// Labeled form field with optional inline error text. Validation failures
/// annotate the field through `error`; the field itself holds no state.
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(optional, into)] error: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let error = Signal::derive(move || error.get());
    view! {
        <div>
            <label class="label">{label}</label>
            {children()}
            <Show when=move || error.get().is_some() fallback=|| ()>
                <p class="mt-1 text-xs text-red-600">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
