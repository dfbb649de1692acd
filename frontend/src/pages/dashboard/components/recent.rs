use leptos::*;

use crate::{
    api::{AttendanceRecord, AttendanceStatus, Employee},
    utils::time::format_date,
};

#[component]
pub fn RecentEmployees(employees: Vec<Employee>) -> impl IntoView {
    view! {
        <div class="card p-5">
            <div class="mb-4 flex items-center justify-between">
                <h2 class="font-semibold text-gray-900">"Recent Employees"</h2>
                <a href="/employees" class="text-sm font-medium text-blue-600 hover:underline">
                    "View all"
                </a>
            </div>
            {if employees.is_empty() {
                view! { <p class="text-sm text-gray-500">"No employees yet."</p> }.into_view()
            } else {
                view! {
                    <ul class="divide-y divide-gray-100">
                        {employees
                            .into_iter()
                            .map(|employee| {
                                view! {
                                    <li class="flex items-center justify-between py-2.5">
                                        <div>
                                            <p class="text-sm font-medium text-gray-900">
                                                {employee.full_name}
                                            </p>
                                            <p class="text-xs text-gray-500">{employee.department}</p>
                                        </div>
                                        <span class="font-mono text-xs text-gray-400">{employee.id}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_view()
            }}
        </div>
    }
}

#[component]
pub fn RecentAttendance(records: Vec<AttendanceRecord>) -> impl IntoView {
    view! {
        <div class="card p-5">
            <div class="mb-4 flex items-center justify-between">
                <h2 class="font-semibold text-gray-900">"Recent Attendance"</h2>
                <a href="/attendance" class="text-sm font-medium text-blue-600 hover:underline">
                    "View all"
                </a>
            </div>
            {if records.is_empty() {
                view! { <p class="text-sm text-gray-500">"No attendance records yet."</p> }
                    .into_view()
            } else {
                view! {
                    <ul class="divide-y divide-gray-100">
                        {records
                            .into_iter()
                            .map(|record| {
                                let badge = match record.status {
                                    AttendanceStatus::Present => {
                                        "rounded-full bg-green-100 px-2 py-0.5 text-xs font-medium text-green-700"
                                    }
                                    AttendanceStatus::Absent => {
                                        "rounded-full bg-red-100 px-2 py-0.5 text-xs font-medium text-red-700"
                                    }
                                };
                                view! {
                                    <li class="flex items-center justify-between py-2.5">
                                        <div>
                                            <p class="text-sm font-medium text-gray-900">
                                                {record.display_name().to_string()}
                                            </p>
                                            <p class="text-xs text-gray-500">{format_date(record.date)}</p>
                                        </div>
                                        <span class=badge>{record.status.as_str()}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_view()
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{fixtures, ssr::render_to_string};
    use chrono::NaiveDate;

    #[test]
    fn recent_employees_lists_names_with_view_all_link() {
        let html = render_to_string(|| {
            view! {
                <RecentEmployees employees=vec![fixtures::employee(
                    "EMP001",
                    "Alice Johnson",
                    "alice@example.com",
                    "Engineering",
                )]/>
            }
        });
        assert!(html.contains("Alice Johnson"));
        assert!(html.contains("href=\"/employees\""));
        assert!(html.contains("View all"));
    }

    #[test]
    fn empty_sections_fall_back_to_placeholder_copy() {
        let employees_html =
            render_to_string(|| view! { <RecentEmployees employees=Vec::new()/> });
        assert!(employees_html.contains("No employees yet."));

        let records_html =
            render_to_string(|| view! { <RecentAttendance records=Vec::new()/> });
        assert!(records_html.contains("No attendance records yet."));
    }

    #[test]
    fn recent_attendance_shows_status_badges() {
        let html = render_to_string(|| {
            view! {
                <RecentAttendance records=vec![fixtures::attendance(
                    "1",
                    "EMP001",
                    NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
                    AttendanceStatus::Absent,
                )]/>
            }
        });
        assert!(html.contains("Absent"));
        assert!(html.contains("Mar 9, 2025"));
    }
}
