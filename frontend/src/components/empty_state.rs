use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] action: Option<View>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-24 gap-3">
            <svg class="h-10 w-10 text-gray-300" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M2.25 13.5h3.86a2.25 2.25 0 012.012 1.244l.256.512a2.25 2.25 0 002.013 1.244h3.218a2.25 2.25 0 002.013-1.244l.256-.512a2.25 2.25 0 012.013-1.244h3.859M2.25 13.5V6.75A2.25 2.25 0 014.5 4.5h15a2.25 2.25 0 012.25 2.25v6.75m-19.5 0v4.5A2.25 2.25 0 004.5 20.25h15a2.25 2.25 0 002.25-2.25v-4.5"/>
            </svg>
            <div class="text-center">
                <p class="text-sm font-medium text-gray-600">{title}</p>
                {description.map(|desc| view! {
                    <p class="text-xs text-gray-400 mt-1">{desc}</p>
                })}
            </div>
            {action}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn empty_state_renders_title_and_description() {
        let html = render_to_string(|| {
            view! {
                <EmptyState
                    title="No attendance records found"
                    description="Mark attendance to get started"
                />
            }
        });
        assert!(html.contains("No attendance records found"));
        assert!(html.contains("Mark attendance to get started"));
    }

    #[test]
    fn empty_state_renders_call_to_action() {
        let html = render_to_string(|| {
            let action = view! { <button class="btn-primary">"Mark Attendance"</button> }.into_view();
            view! { <EmptyState title="No records" action=action/> }
        });
        assert!(html.contains("Mark Attendance"));
    }
}
