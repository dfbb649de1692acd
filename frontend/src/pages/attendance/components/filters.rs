use leptos::*;

use super::super::utils::FilterFormState;
use crate::{
    api::Employee,
    components::common::{Button, ButtonVariant},
};

#[component]
pub fn AttendanceFilters(
    form: RwSignal<FilterFormState>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(optional, into)] error: MaybeProp<String>,
    on_apply: Callback<()>,
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="card p-4">
            <div class="flex flex-wrap items-end gap-3">
                <div class="flex flex-col gap-1">
                    <label class="label">"Employee"</label>
                    <select
                        class="input"
                        prop:value=move || form.get().employee_id
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.employee_id = value);
                        }
                    >
                        <option value="">"All employees"</option>
                        <For
                            each=move || employees.get()
                            key=|employee| employee.id.clone()
                            children=|employee: Employee| {
                                view! {
                                    <option value=employee.id.clone()>
                                        {format!("{} ({})", employee.full_name, employee.id)}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>
                <div class="flex flex-col gap-1">
                    <label class="label">"From"</label>
                    <input
                        class="input"
                        type="date"
                        prop:value=move || form.get().date_from
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.date_from = value);
                        }
                    />
                </div>
                <div class="flex flex-col gap-1">
                    <label class="label">"To"</label>
                    <input
                        class="input"
                        type="date"
                        prop:value=move || form.get().date_to
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|state| state.date_to = value);
                        }
                    />
                </div>
                <div class="flex gap-2">
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| on_apply.call(()))
                    >
                        "Apply"
                    </Button>
                    <Button
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |_| on_reset.call(()))
                    >
                        "Reset"
                    </Button>
                </div>
            </div>
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! { <p class="mt-2 text-sm text-red-600">{message}</p> }
                    })
            }}
        </div>
    }
}
