use leptos::*;

#[cfg(target_arch = "wasm32")]
const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient, app-level notifications. Mutation outcomes report here;
/// fetch-on-load failures use the full-view error state instead.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toasts {
    fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: create_rw_signal(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }

    pub fn items(&self) -> Signal<Vec<Toast>> {
        let items = self.items;
        Signal::derive(move || items.get())
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.update(|next| *next = next.wrapping_add(1));
        self.items.update(|items| {
            items.push(Toast { id, kind, message });
        });

        #[cfg(target_arch = "wasm32")]
        {
            let toasts = *self;
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                toasts.dismiss(id);
            });
        }
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(provide_toasts)
}

#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_toasts();
    view! {
        {children()}
        <ToastHost/>
    }
}

#[component]
fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    let items = toasts.items();
    view! {
        <div class="fixed top-4 right-4 z-[80] flex flex-col gap-2 w-80">
            <For
                each=move || items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let classes = match toast.kind {
                        ToastKind::Success => "bg-green-50 border-green-200 text-green-800",
                        ToastKind::Error => "bg-red-50 border-red-200 text-red-800",
                    };
                    let id = toast.id;
                    view! {
                        <div class=format!("flex items-start justify-between gap-3 rounded-lg border px-4 py-3 text-sm shadow-md {}", classes)>
                            <span>{toast.message.clone()}</span>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="opacity-60 hover:opacity-100 leading-none"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {"\u{00d7}"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{render_to_string, with_runtime};

    #[test]
    fn push_and_dismiss_update_the_collection() {
        with_runtime(|| {
            let toasts = Toasts::new();
            toasts.success("Jane Doe added successfully");
            toasts.error("Request failed");

            let items = toasts.items().get_untracked();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].kind, ToastKind::Success);

            let first_id = items[0].id;
            toasts.dismiss(first_id);
            let items = toasts.items().get_untracked();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].kind, ToastKind::Error);
        });
    }

    #[test]
    fn ids_are_not_reused_after_dismiss() {
        with_runtime(|| {
            let toasts = Toasts::new();
            toasts.success("one");
            let first_id = toasts.items().get_untracked()[0].id;
            toasts.dismiss(first_id);
            toasts.success("two");
            assert_ne!(toasts.items().get_untracked()[0].id, first_id);
        });
    }

    #[test]
    fn host_renders_pushed_toasts() {
        let html = render_to_string(|| {
            let toasts = provide_toasts();
            toasts.error("Employee not found");
            view! { <ToastHost/> }
        });
        assert!(html.contains("Employee not found"));
    }
}
