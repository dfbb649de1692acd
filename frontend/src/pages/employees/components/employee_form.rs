use leptos::*;

use super::super::utils::{EmployeeFormErrors, EmployeeFormState};
use crate::{
    api::DEPARTMENTS,
    components::{
        common::{Button, ButtonVariant},
        forms::FormField,
    },
};

#[component]
pub fn EmployeeForm(
    form: RwSignal<EmployeeFormState>,
    errors: RwSignal<EmployeeFormErrors>,
    #[prop(into)] submitting: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="space-y-4"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.call(());
            }
        >
            <FormField label="Employee ID" error=Signal::derive(move || errors.get().id)>
                <input
                    class="input"
                    type="text"
                    placeholder="EMP001"
                    prop:value=move || form.get().id
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.id = value);
                    }
                />
            </FormField>
            <FormField label="Full Name" error=Signal::derive(move || errors.get().full_name)>
                <input
                    class="input"
                    type="text"
                    placeholder="Jane Doe"
                    prop:value=move || form.get().full_name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.full_name = value);
                    }
                />
            </FormField>
            <FormField label="Email" error=Signal::derive(move || errors.get().email)>
                <input
                    class="input"
                    type="text"
                    placeholder="jane.doe@example.com"
                    prop:value=move || form.get().email
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.email = value);
                    }
                />
            </FormField>
            <FormField label="Department" error=Signal::derive(move || errors.get().department)>
                <select
                    class="input"
                    prop:value=move || form.get().department
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|state| state.department = value);
                    }
                >
                    <option value="">"Select a department"</option>
                    {DEPARTMENTS
                        .iter()
                        .map(|department| {
                            view! { <option value=*department>{*department}</option> }
                        })
                        .collect_view()}
                </select>
            </FormField>
            <div class="flex justify-end gap-2 pt-2">
                <Button
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| on_cancel.call(()))
                >
                    "Cancel"
                </Button>
                <Button variant=ButtonVariant::Primary button_type="submit" disabled=submitting>
                    {move || if submitting.get() { "Adding..." } else { "Add Employee" }}
                </Button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_lists_every_department() {
        let html = render_to_string(|| {
            let form = create_rw_signal(EmployeeFormState::default());
            let errors = create_rw_signal(EmployeeFormErrors::default());
            view! {
                <EmployeeForm
                    form=form
                    errors=errors
                    submitting=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        for department in DEPARTMENTS {
            assert!(html.contains(department), "missing {department}");
        }
        assert!(html.contains("Add Employee"));
    }

    #[test]
    fn validation_errors_are_shown_inline() {
        let html = render_to_string(|| {
            let form = create_rw_signal(EmployeeFormState::default());
            let errors = create_rw_signal(EmployeeFormState::default().validate());
            view! {
                <EmployeeForm
                    form=form
                    errors=errors
                    submitting=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Employee ID is required"));
        assert!(html.contains("Email is required"));
        assert!(html.contains("Department is required"));
    }
}
