use leptos::*;

use crate::{
    api::Employee,
    components::common::{Button, ButtonVariant},
    utils::time::format_date,
};

#[component]
pub fn EmployeeTable(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    deleting_id: RwSignal<Option<String>>,
    on_delete: Callback<Employee>,
) -> impl IntoView {
    view! {
        <div class="card overflow-hidden">
            <table class="w-full text-left text-sm">
                <thead class="border-b border-gray-200 bg-gray-50 text-xs uppercase text-gray-500">
                    <tr>
                        <th class="px-4 py-3">"Employee"</th>
                        <th class="px-4 py-3">"ID"</th>
                        <th class="px-4 py-3">"Department"</th>
                        <th class="px-4 py-3">"Joined"</th>
                        <th class="px-4 py-3">"Days Present"</th>
                        <th class="px-4 py-3 text-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || employees.get()
                        key=|employee| employee.id.clone()
                        children=move |employee: Employee| {
                            let initial = employee
                                .full_name
                                .chars()
                                .next()
                                .map(|c| c.to_uppercase().to_string())
                                .unwrap_or_default();
                            let row_id = employee.id.clone();
                            let is_deleting = Signal::derive(move || {
                                deleting_id.get().as_deref() == Some(row_id.as_str())
                            });
                            let delete_target = employee.clone();
                            view! {
                                <tr class="border-b border-gray-100 last:border-0 hover:bg-gray-50">
                                    <td class="px-4 py-3">
                                        <div class="flex items-center gap-3">
                                            <span class="flex h-9 w-9 items-center justify-center rounded-full bg-indigo-100 font-semibold text-indigo-700">
                                                {initial}
                                            </span>
                                            <div>
                                                <p class="font-medium text-gray-900">{employee.full_name.clone()}</p>
                                                <p class="text-xs text-gray-500">{employee.email.clone()}</p>
                                            </div>
                                        </div>
                                    </td>
                                    <td class="px-4 py-3">
                                        <span class="rounded bg-gray-100 px-2 py-1 font-mono text-xs text-gray-700">
                                            {employee.id.clone()}
                                        </span>
                                    </td>
                                    <td class="px-4 py-3 text-gray-700">{employee.department.clone()}</td>
                                    <td class="px-4 py-3 text-gray-500">
                                        {format_date(employee.created_at.date())}
                                    </td>
                                    <td class="px-4 py-3">
                                        <span class="rounded-full bg-green-100 px-2 py-1 text-xs font-medium text-green-700">
                                            {employee.total_present}
                                        </span>
                                    </td>
                                    <td class="px-4 py-3 text-right">
                                        <Button
                                            variant=ButtonVariant::Danger
                                            disabled=is_deleting
                                            on_click=Callback::new(move |_| {
                                                on_delete.call(delete_target.clone())
                                            })
                                        >
                                            {move || if is_deleting.get() { "Deleting..." } else { "Delete" }}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{fixtures, ssr::render_to_string};

    #[test]
    fn table_renders_roster_rows() {
        let html = render_to_string(|| {
            let employees = create_rw_signal(vec![
                fixtures::employee("EMP001", "Alice Johnson", "alice@example.com", "Engineering"),
                fixtures::employee("EMP002", "Bob Smith", "bob@example.com", "Sales"),
            ]);
            let deleting_id = create_rw_signal(None::<String>);
            view! {
                <EmployeeTable
                    employees=employees
                    deleting_id=deleting_id
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Alice Johnson"));
        assert!(html.contains("bob@example.com"));
        assert!(html.contains("EMP002"));
        assert!(html.contains("Engineering"));
    }

    #[test]
    fn delete_in_flight_row_shows_progress_label() {
        let html = render_to_string(|| {
            let employees = create_rw_signal(vec![fixtures::employee(
                "EMP001",
                "Alice Johnson",
                "alice@example.com",
                "Engineering",
            )]);
            let deleting_id = create_rw_signal(Some("EMP001".to_string()));
            view! {
                <EmployeeTable
                    employees=employees
                    deleting_id=deleting_id
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Deleting..."));
    }
}
