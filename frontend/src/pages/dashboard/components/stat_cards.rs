use leptos::*;

use crate::api::DashboardStats;

#[component]
fn StatCard(label: &'static str, value: i64, accent: &'static str) -> impl IntoView {
    view! {
        <div class="card flex items-center gap-4 p-5">
            <span class=format!("h-10 w-1.5 rounded-full {}", accent)></span>
            <div>
                <p class="text-sm text-gray-500">{label}</p>
                <p class="text-2xl font-bold text-gray-900">{value}</p>
            </div>
        </div>
    }
}

#[component]
pub fn StatCards(stats: DashboardStats) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 xl:grid-cols-4">
            <StatCard label="Total Employees" value=stats.total_employees accent="bg-blue-500"/>
            <StatCard label="Departments" value=stats.total_departments accent="bg-purple-500"/>
            <StatCard label="Present Today" value=stats.present_today accent="bg-green-500"/>
            <StatCard label="Absent Today" value=stats.absent_today accent="bg-red-500"/>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_cards_show_all_four_counters() {
        let html = render_to_string(|| {
            view! {
                <StatCards stats=DashboardStats {
                    total_employees: 12,
                    total_departments: 4,
                    present_today: 9,
                    absent_today: 3,
                }/>
            }
        });
        assert!(html.contains("Total Employees"));
        assert!(html.contains("12"));
        assert!(html.contains("Present Today"));
        assert!(html.contains("Absent Today"));
    }
}
