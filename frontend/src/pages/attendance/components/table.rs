use leptos::*;

use crate::{
    api::{AttendanceRecord, AttendanceStatus},
    components::common::{Button, ButtonVariant},
    utils::time::format_date,
};

fn status_badge_class(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => {
            "rounded-full bg-green-100 px-2 py-1 text-xs font-medium text-green-700"
        }
        AttendanceStatus::Absent => {
            "rounded-full bg-red-100 px-2 py-1 text-xs font-medium text-red-700"
        }
    }
}

#[component]
pub fn AttendanceTable(
    #[prop(into)] records: Signal<Vec<AttendanceRecord>>,
    deleting_id: RwSignal<Option<String>>,
    on_delete: Callback<AttendanceRecord>,
) -> impl IntoView {
    view! {
        <div class="card overflow-hidden">
            <table class="w-full text-left text-sm">
                <thead class="border-b border-gray-200 bg-gray-50 text-xs uppercase text-gray-500">
                    <tr>
                        <th class="px-4 py-3">"Employee"</th>
                        <th class="px-4 py-3">"Date"</th>
                        <th class="px-4 py-3">"Status"</th>
                        <th class="px-4 py-3 text-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || records.get()
                        key=|record| record.id.clone()
                        children=move |record: AttendanceRecord| {
                            let row_id = record.id.clone();
                            let is_deleting = Signal::derive(move || {
                                deleting_id.get().as_deref() == Some(row_id.as_str())
                            });
                            let delete_target = record.clone();
                            view! {
                                <tr class="border-b border-gray-100 last:border-0 hover:bg-gray-50">
                                    <td class="px-4 py-3">
                                        <p class="font-medium text-gray-900">
                                            {record.display_name().to_string()}
                                        </p>
                                        <p class="font-mono text-xs text-gray-500">
                                            {record.employee_id.clone()}
                                        </p>
                                    </td>
                                    <td class="px-4 py-3 text-gray-700">{format_date(record.date)}</td>
                                    <td class="px-4 py-3">
                                        <span class=status_badge_class(record.status)>
                                            {record.status.as_str()}
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
