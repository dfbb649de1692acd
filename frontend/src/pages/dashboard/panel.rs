use leptos::*;

use super::{
    components::{RecentAttendance, RecentEmployees, StatCards},
    view_model::use_dashboard_view_model,
};
use crate::{
    components::{error::ErrorState, layout::Layout, loading::LoadingState, page_header::PageHeader},
    utils::time::{format_long_date, today},
};

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <Layout>
            <PageHeader title="Dashboard" description=format_long_date(today())/>
            {move || match vm.dashboard.get() {
                None => view! { <LoadingState message="Loading dashboard..."/> }.into_view(),
                Some(Err(message)) => view! {
                    <ErrorState
                        message=message
                        on_retry=Callback::new(move |_| vm.retry())
                    />
                }
                .into_view(),
                Some(Ok(data)) => view! {
                    <div class="space-y-6">
                        <StatCards stats=data.stats/>
                        <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                            <RecentEmployees employees=data.recent_employees/>
                            <RecentAttendance records=data.recent_attendance/>
                        </div>
                    </div>
                }
                .into_view(),
            }}
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_header_with_todays_date() {
        let html = render_to_string(|| view! { <DashboardPanel/> });
        assert!(html.contains("Dashboard"));
        assert!(html.contains(&format_long_date(today())));
        assert!(html.contains("Loading dashboard..."));
    }
}
