use leptos::*;

use super::{
    components::{AttendanceFilters, AttendanceTable, MarkAttendanceForm},
    view_model::use_attendance_view_model,
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
fn SummaryBadge(label: &'static str, #[prop(into)] value: Signal<usize>, color: &'static str) -> impl IntoView {
    view! {
        <div class="card flex items-center gap-3 px-4 py-3">
            <span class=format!("h-2.5 w-2.5 rounded-full {}", color)></span>
            <span class="text-sm text-gray-500">{label}</span>
            <span class="ml-auto text-lg font-semibold text-gray-900">{move || value.get()}</span>
        </div>
    }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();
    let roster = Signal::derive(move || vm.employees.get().unwrap_or_default());
    let records = Signal::derive(move || vm.records.get());

    view! {
        <Layout>
            <PageHeader
                title="Attendance"
                description="Log and review daily attendance"
                action=view! {
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| vm.open_form())
                    >
                        "Mark Attendance"
                    </Button>
                }
                .into_view()
            />
            <div class="space-y-4">
                <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                    <SummaryBadge label="Total Records" value=vm.total_count() color="bg-blue-500"/>
                    <SummaryBadge label="Present" value=vm.present_count() color="bg-green-500"/>
                    <SummaryBadge label="Absent" value=vm.absent_count() color="bg-red-500"/>
                </div>
                <AttendanceFilters
                    form=vm.filter_form
                    employees=roster
                    error=Signal::derive(move || vm.filter_error.get())
                    on_apply=Callback::new(move |_| vm.apply_filters())
                    on_reset=Callback::new(move |_| vm.reset_filters())
                />
                {move || match vm.records_resource.get() {
                    None => view! { <LoadingState message="Loading attendance..."/> }.into_view(),
                    Some(Err(message)) => view! {
                        <ErrorState
                            message=message
                            on_retry=Callback::new(move |_| vm.retry())
                        />
                    }
                    .into_view(),
                    Some(Ok(())) => {
                        if vm.records.get().is_empty() {
                            view! {
                                <EmptyState
                                    title="No attendance records"
                                    description="Nothing matches the current filters."
                                    action=view! {
                                        <Button
                                            variant=ButtonVariant::Primary
                                            on_click=Callback::new(move |_| vm.open_form())
                                        >
                                            "Mark Attendance"
                                        </Button>
                                    }
                                    .into_view()
                                />
                            }
                            .into_view()
                        } else {
                            view! {
                                <AttendanceTable
                                    records=records
                                    deleting_id=vm.deleting_id
                                    on_delete=Callback::new(move |record| {
                                        vm.request_delete(record)
                                    })
                                />
                            }
                            .into_view()
                        }
                    }
                }}
            </div>
            <Show when=move || vm.show_form.get()>
                <Modal title="Mark Attendance" on_close=Callback::new(move |_| vm.close_form())>
                    <MarkAttendanceForm
                        form=vm.mark_form
                        errors=vm.mark_errors
                        employees=roster
                        submitting=vm.create_action.pending()
                        on_submit=Callback::new(move |_| vm.submit())
                        on_cancel=Callback::new(move |_| vm.close_form())
                    />
                </Modal>
            </Show>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.delete_target.get().is_some())
                title="Delete Attendance Record"
                message="Remove this attendance record?"
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
    fn panel_renders_summary_and_filters() {
        let html = render_to_string(|| view! { <AttendancePanel/> });
        assert!(html.contains("Attendance"));
        assert!(html.contains("Total Records"));
        assert!(html.contains("Mark Attendance"));
        assert!(html.contains("All employees"));
    }
}
