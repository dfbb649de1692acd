use leptos::ev::KeyboardEvent;
use leptos::*;

/// Dismissible modal surface: closes on backdrop click, the header control,
/// or Escape. Owns no state — the caller decides when it is shown.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let close_on_backdrop = on_close;
    let close_on_button = on_close;
    let close_on_esc = on_close;

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="Close"
                class="absolute inset-0 bg-black/50"
                on:click=move |_| close_on_backdrop.call(())
            ></button>
            <div
                class="relative z-[51] w-full max-w-md rounded-xl bg-white shadow-xl"
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        close_on_esc.call(());
                    }
                }
            >
                <div class="flex items-center justify-between px-6 py-4 border-b">
                    <h2 class="text-base font-semibold text-gray-900">{title}</h2>
                    <button
                        type="button"
                        aria-label="Close"
                        class="text-gray-400 hover:text-gray-600 text-xl leading-none"
                        on:click=move |_| close_on_button.call(())
                    >
                        {"\u{00d7}"}
                    </button>
                </div>
                <div class="px-6 py-5">{children()}</div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_renders_title_and_children() {
        let html = render_to_string(|| {
            view! {
                <Modal title="Add New Employee" on_close=Callback::new(|_| {})>
                    <p>"form body"</p>
                </Modal>
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("Add New Employee"));
        assert!(html.contains("form body"));
    }
}
