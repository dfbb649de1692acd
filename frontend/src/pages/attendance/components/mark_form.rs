use leptos::*;

use super::super::utils::{MarkFormErrors, MarkFormState};
use crate::{
    api::{AttendanceStatus, Employee},
    components::{
        common::{Button, ButtonVariant},
        forms::FormField,
    },
};

#[component]
pub fn MarkAttendanceForm(
    form: RwSignal<MarkFormState>,
    errors: RwSignal<MarkFormErrors>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] submitting: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let status_radio = move |status: AttendanceStatus| {
        let checked = Signal::derive(move || form.get().status == status);
        view! {
            <label class="flex items-center gap-2 text-sm text-gray-700">
                <input
                    type="radio"
                    name="status"
                    value=status.as_str()
                    prop:checked=checked
                    on:change=move |_| form.update(|state| state.status = status)
                />
                {status.as_str()}
            </label>
        }
    };

    view! {
        <form
            class="space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <FormField label="Employee" error=Signal::derive(move || errors.get().employee_id)>
                <select
                    class="input"
                    prop:value=move || form.get().employee_id
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.employee_id = value);
                    }
                >
                    <option value="">"Select an employee"</option>
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
            </FormField>
            <FormField label="Date" error=Signal::derive(move || errors.get().date)>
                <input
                    class="input"
                    type="date"
                    prop:value=move || form.get().date
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.date = value);
                    }
                />
            </FormField>
            <div>
                <span class="label">"Status"</span>
                <div class="mt-1 flex gap-6">
                    {status_radio(AttendanceStatus::Present)}
                    {status_radio(AttendanceStatus::Absent)}
                </div>
            </div>
            <div class="flex justify-end gap-2 pt-2">
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| on_cancel.call(()))
                >
                    "Cancel"
                </Button>
                <Button variant=ButtonVariant::Primary button_type="submit" disabled=submitting>
                    {move || if submitting.get() { "Saving..." } else { "Mark Attendance" }}
                </Button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{fixtures, ssr::render_to_string};

    #[test]
    fn mark_form_offers_both_statuses() {
        let html = render_to_string(|| {
            let form = create_rw_signal(MarkFormState::default());
            let errors = create_rw_signal(MarkFormErrors::default());
            let employees = create_rw_signal(vec![fixtures::employee(
                "EMP001",
                "Alice Johnson",
                "alice@example.com",
                "Engineering",
            )]);
            view! {
                <MarkAttendanceForm
                    form=form
                    errors=errors
                    employees=employees
                    submitting=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Present"));
        assert!(html.contains("Absent"));
        assert!(html.contains("Select an employee"));
        assert!(html.contains("Alice Johnson (EMP001)"));
    }

    #[test]
    fn missing_employee_error_is_shown() {
        let html = render_to_string(|| {
            let form = create_rw_signal(MarkFormState::default());
            let errors = create_rw_signal(MarkFormState::default().validate());
            let employees = create_rw_signal(Vec::new());
            view! {
                <MarkAttendanceForm
                    form=form
                    errors=errors
                    employees=employees
                    submitting=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Employee is required"));
    }
}
