use std::rc::Rc;

use leptos::*;

use super::{
    repository::AttendanceRepository,
    utils::{apply_marked, apply_removed, FilterFormState, MarkFormErrors, MarkFormState},
};
use crate::{
    api::{
        ApiClient, AttendanceCreate, AttendanceFilter, AttendanceRecord, AttendanceStatus,
        Employee,
    },
    state::toasts::use_toasts,
};

/// Resource key for the records list. Changes when the user applies a new
/// filter or asks for a retry.
#[derive(Clone, PartialEq, Eq)]
pub struct RecordsQuery {
    pub token: u32,
    pub filter: AttendanceFilter,
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub records: RwSignal<Vec<AttendanceRecord>>,
    pub reload: RwSignal<u32>,
    pub applied_filter: RwSignal<AttendanceFilter>,
    pub records_resource: Resource<RecordsQuery, Result<(), String>>,
    pub employees: Resource<(), Vec<Employee>>,
    pub filter_form: RwSignal<FilterFormState>,
    pub filter_error: RwSignal<Option<String>>,
    pub show_form: RwSignal<bool>,
    pub mark_form: RwSignal<MarkFormState>,
    pub mark_errors: RwSignal<MarkFormErrors>,
    pub create_action: Action<AttendanceCreate, Result<AttendanceRecord, String>>,
    pub delete_target: RwSignal<Option<AttendanceRecord>>,
    pub deleting_id: RwSignal<Option<String>>,
    pub delete_action: Action<AttendanceRecord, Result<AttendanceRecord, String>>,
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AttendanceRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let records = create_rw_signal(Vec::<AttendanceRecord>::new());
    let reload = create_rw_signal(0u32);
    let applied_filter = create_rw_signal(AttendanceFilter::default());
    let filter_form = create_rw_signal(FilterFormState::default());
    let filter_error = create_rw_signal(None::<String>);
    let show_form = create_rw_signal(false);
    let mark_form = create_rw_signal(MarkFormState::default());
    let mark_errors = create_rw_signal(MarkFormErrors::default());
    let delete_target = create_rw_signal(None::<AttendanceRecord>);
    let deleting_id = create_rw_signal(None::<String>);

    let repo_for_records = repository.clone();
    let records_resource = create_resource(
        move || RecordsQuery {
            token: reload.get(),
            filter: applied_filter.get(),
        },
        move |query| {
            let repo = repo_for_records.clone();
            async move {
                let list = repo.fetch_records(&query.filter).await?;
                records.set(list);
                Ok(())
            }
        },
    );

    // Dropdown roster. The page stays usable if this fails.
    let repo_for_employees = repository.clone();
    let employees = create_resource(
        || (),
        move |_| {
            let repo = repo_for_employees.clone();
            async move {
                match repo.fetch_employees().await {
                    Ok(list) => list,
                    Err(err) => {
                        log::warn!("employee roster unavailable: {}", err);
                        Vec::new()
                    }
                }
            }
        },
    );

    let repo_for_create = repository.clone();
    let mark_record = create_action(move |payload: &AttendanceCreate| {
        let repo = repo_for_create.clone();
        let payload = payload.clone();
        async move { repo.add_record(payload).await }
    });

    let repo_for_delete = repository;
    let delete_record = create_action(move |record: &AttendanceRecord| {
        let repo = repo_for_delete.clone();
        let record = record.clone();
        async move {
            repo.remove_record(&record.id).await?;
            Ok(record)
        }
    });

    create_effect(move |_| {
        if let Some(result) = mark_record.value().get() {
            match result {
                Ok(record) => {
                    toasts.success(format!(
                        "Marked {} for {}",
                        record.status.as_str(),
                        record.display_name()
                    ));
                    records.update(|list| apply_marked(list, record));
                    show_form.set(false);
                    mark_form.update(|state| state.reset());
                    mark_errors.set(MarkFormErrors::default());
                }
                Err(err) => {
                    log::error!("mark attendance failed: {}", err);
                    toasts.error(err);
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_record.value().get() {
            deleting_id.set(None);
            match result {
                Ok(record) => {
                    toasts.success("Attendance record deleted".to_string());
                    records.update(|list| apply_removed(list, &record.id));
                }
                Err(err) => {
                    log::error!("delete attendance failed: {}", err);
                    toasts.error(err);
                }
            }
        }
    });

    AttendanceViewModel {
        records,
        reload,
        applied_filter,
        records_resource,
        employees,
        filter_form,
        filter_error,
        show_form,
        mark_form,
        mark_errors,
        create_action: mark_record,
        delete_target,
        deleting_id,
        delete_action: delete_record,
    }
}

impl AttendanceViewModel {
    pub fn present_count(&self) -> Signal<usize> {
        let records = self.records;
        Signal::derive(move || {
            records
                .get()
                .iter()
                .filter(|r| r.status == AttendanceStatus::Present)
                .count()
        })
    }

    pub fn absent_count(&self) -> Signal<usize> {
        let records = self.records;
        Signal::derive(move || {
            records
                .get()
                .iter()
                .filter(|r| r.status == AttendanceStatus::Absent)
                .count()
        })
    }

    pub fn total_count(&self) -> Signal<usize> {
        let records = self.records;
        Signal::derive(move || records.get().len())
    }

    pub fn retry(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    /// Parses the filter inputs and commits them, which refetches the list.
    pub fn apply_filters(&self) {
        match self.filter_form.get_untracked().to_filter() {
            Ok(filter) => {
                self.filter_error.set(None);
                self.applied_filter.set(filter);
            }
            Err(message) => self.filter_error.set(Some(message)),
        }
    }

    pub fn reset_filters(&self) {
        self.filter_form.set(FilterFormState::default());
        self.filter_error.set(None);
        self.applied_filter.set(AttendanceFilter::default());
    }

    pub fn open_form(&self) {
        self.mark_form.set(MarkFormState::default());
        self.mark_errors.set(MarkFormErrors::default());
        self.show_form.set(true);
    }

    pub fn close_form(&self) {
        self.show_form.set(false);
        self.mark_form.set(MarkFormState::default());
        self.mark_errors.set(MarkFormErrors::default());
    }

    pub fn submit(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        let state = self.mark_form.get_untracked();
        let errors = state.validate();
        if !errors.is_empty() {
            self.mark_errors.set(errors);
            return;
        }
        match state.to_request() {
            Ok(payload) => {
                self.mark_errors.set(MarkFormErrors::default());
                self.create_action.dispatch(payload);
            }
            Err(message) => self.mark_errors.set(MarkFormErrors {
                date: Some(message),
                ..Default::default()
            }),
        }
    }

    pub fn request_delete(&self, record: AttendanceRecord) {
        self.delete_target.set(Some(record));
    }

    pub fn cancel_delete(&self) {
        self.delete_target.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(record) = self.delete_target.get_untracked() {
            self.delete_target.set(None);
            self.deleting_id.set(Some(record.id.clone()));
            self.delete_action.dispatch(record);
        }
    }
}
