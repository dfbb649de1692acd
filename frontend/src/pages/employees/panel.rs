use leptos::*;

use super::{
    components::{EmployeeForm, EmployeeTable},
    view_model::use_employees_view_model,
};
use crate::components::{
    common::{Button, ButtonVariant},
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    error::ErrorState,
    layout::Layout,
    loading::LoadingState,
    modal::Modal,
    page_header::PageHeader,
};

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();
    let filtered = vm.filtered();

    let count_label = Signal::derive(move || {
        let count = vm.employees.get().len();
        if count == 1 {
            "1 employee".to_string()
        } else {
            format!("{} employees", count)
        }
    });
    let delete_message = Signal::derive(move || {
        vm.delete_target
            .get()
            .map(|employee| {
                format!(
                    "Delete \"{}\"? This will also remove all attendance records.",
                    employee.full_name
                )
            })
            .unwrap_or_default()
    });

    view! {
        <Layout>
            <PageHeader
                title="Employees"
                description=count_label
                action=view! {
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| vm.open_form())
                    >
                        "Add Employee"
                    </Button>
                }
                .into_view()
            />
            {move || match vm.employees_resource.get() {
                None => view! { <LoadingState message="Loading employees..."/> }.into_view(),
                Some(Err(message)) => view! {
                    <ErrorState
                        message=message
                        on_retry=Callback::new(move |_| vm.retry())
                    />
                }
                .into_view(),
                Some(Ok(())) => {
                    if vm.employees.get().is_empty() {
                        view! {
                            <EmptyState
                                title="No employees yet"
                                description="Add your first employee to get started."
                                action=view! {
                                    <Button
                                        variant=ButtonVariant::Primary
                                        on_click=Callback::new(move |_| vm.open_form())
                                    >
                                        "Add Employee"
                                    </Button>
                                }
                                .into_view()
                            />
                        }
                        .into_view()
                    } else {
                        view! {
                            <div class="space-y-4">
                                <input
                                    class="input max-w-sm"
                                    type="search"
                                    placeholder="Search by name, email, department or ID..."
                                    prop:value=move || vm.search.get()
                                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                                />
                                {move || {
                                    let employees = filtered.get();
                                    if employees.is_empty() {
                                        view! {
                                            <p class="py-8 text-center text-sm text-gray-500">
                                                "No employees match your search."
                                            </p>
                                        }
                                        .into_view()
                                    } else {
                                        view! {
                                            <EmployeeTable
                                                employees=filtered
                                                deleting_id=vm.deleting_id
                                                on_delete=Callback::new(move |employee| {
                                                    vm.request_delete(employee)
                                                })
                                            />
                                        }
                                        .into_view()
                                    }
                                }}
                            </div>
                        }
                        .into_view()
                    }
                }
            }}
            <Show when=move || vm.show_form.get()>
                <Modal title="Add Employee" on_close=Callback::new(move |_| vm.close_form())>
                    <EmployeeForm
                        form=vm.form
                        errors=vm.form_errors
                        submitting=vm.create_action.pending()
                        on_submit=Callback::new(move |_| vm.submit())
                        on_cancel=Callback::new(move |_| vm.close_form())
                    />
                </Modal>
            </Show>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.delete_target.get().is_some())
                title="Delete Employee"
                message=delete_message
                confirm_label="Delete"
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_header_and_loading_state() {
        let html = render_to_string(|| view! { <EmployeesPanel/> });
        assert!(html.contains("Employees"));
        assert!(html.contains("Add Employee"));
        assert!(html.contains("Loading employees..."));
    }
}
