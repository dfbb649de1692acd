use leptos::*;

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: MaybeProp<String>,
    #[prop(optional)] action: Option<View>,
) -> impl IntoView {
    let description = Signal::derive(move || description.get());
    view! {
        <div class="flex items-start justify-between mb-6">
            <div>
                <h1 class="text-xl font-bold text-gray-900">{title}</h1>
                <Show when=move || description.get().is_some() fallback=|| ()>
                    <p class="text-sm text-gray-500 mt-0.5">{move || description.get().unwrap_or_default()}</p>
                </Show>
            </div>
            {action}
        </div>
    }
}
