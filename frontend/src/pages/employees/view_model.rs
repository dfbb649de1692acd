use std::rc::Rc;

use leptos::*;

use super::{
    repository::EmployeesRepository,
    utils::{
        apply_created, apply_removed, filter_employees, EmployeeFormErrors, EmployeeFormState,
    },
};
use crate::{
    api::{ApiClient, Employee, EmployeeCreate},
    state::toasts::use_toasts,
};

/// View state for the roster page. The loaded collection lives in a
/// page-owned signal so mutations can update it in place without a refetch.
#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub employees: RwSignal<Vec<Employee>>,
    pub reload: RwSignal<u32>,
    pub employees_resource: Resource<u32, Result<(), String>>,
    pub search: RwSignal<String>,
    pub show_form: RwSignal<bool>,
    pub form: RwSignal<EmployeeFormState>,
    pub form_errors: RwSignal<EmployeeFormErrors>,
    pub create_action: Action<EmployeeCreate, Result<Employee, String>>,
    pub delete_target: RwSignal<Option<Employee>>,
    pub deleting_id: RwSignal<Option<String>>,
    pub delete_action: Action<Employee, Result<Employee, String>>,
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let employees = create_rw_signal(Vec::<Employee>::new());
    let reload = create_rw_signal(0u32);
    let search = create_rw_signal(String::new());
    let show_form = create_rw_signal(false);
    let form = create_rw_signal(EmployeeFormState::default());
    let form_errors = create_rw_signal(EmployeeFormErrors::default());
    let delete_target = create_rw_signal(None::<Employee>);
    let deleting_id = create_rw_signal(None::<String>);

    let repo_for_fetch = repository.clone();
    let employees_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_fetch.clone();
            async move {
                let list = repo.fetch_employees().await?;
                employees.set(list);
                Ok(())
            }
        },
    );

    let repo_for_create = repository.clone();
    let create_employee = create_action(move |payload: &EmployeeCreate| {
        let repo = repo_for_create.clone();
        let payload = payload.clone();
        async move { repo.add_employee(payload).await }
    });

    let repo_for_delete = repository;
    let delete_employee = create_action(move |employee: &Employee| {
        let repo = repo_for_delete.clone();
        let employee = employee.clone();
        async move {
            repo.remove_employee(&employee.id).await?;
            Ok(employee)
        }
    });

    create_effect(move |_| {
        if let Some(result) = create_employee.value().get() {
            match result {
                Ok(employee) => {
                    toasts.success(format!("{} added successfully", employee.full_name));
                    employees.update(|list| apply_created(list, employee));
                    show_form.set(false);
                    form.update(|state| state.reset());
                    form_errors.set(EmployeeFormErrors::default());
                }
                Err(err) => {
                    log::error!("create employee failed: {}", err);
                    toasts.error(err);
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_employee.value().get() {
            deleting_id.set(None);
            match result {
                Ok(employee) => {
                    toasts.success(format!("{} deleted", employee.full_name));
                    employees.update(|list| apply_removed(list, &employee.id));
                }
                Err(err) => {
                    log::error!("delete employee failed: {}", err);
                    toasts.error(err);
                }
            }
        }
    });

    EmployeesViewModel {
        employees,
        reload,
        employees_resource,
        search,
        show_form,
        form,
        form_errors,
        create_action: create_employee,
        delete_target,
        deleting_id,
        delete_action: delete_employee,
    }
}

impl EmployeesViewModel {
    /// Display projection of the loaded collection under the current search.
    pub fn filtered(&self) -> Signal<Vec<Employee>> {
        let employees = self.employees;
        let search = self.search;
        Signal::derive(move || filter_employees(&employees.get(), &search.get()))
    }

    pub fn retry(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }

    pub fn open_form(&self) {
        self.form.set(EmployeeFormState::default());
        self.form_errors.set(EmployeeFormErrors::default());
        self.show_form.set(true);
    }

    pub fn close_form(&self) {
        self.show_form.set(false);
        self.form.set(EmployeeFormState::default());
        self.form_errors.set(EmployeeFormErrors::default());
    }

    /// Validates and, only when clean, dispatches the create call.
    pub fn submit(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        let state = self.form.get_untracked();
        let errors = state.validate();
        if !errors.is_empty() {
            self.form_errors.set(errors);
            return;
        }
        self.form_errors.set(EmployeeFormErrors::default());
        self.create_action.dispatch(state.to_request());
    }

    pub fn request_delete(&self, employee: Employee) {
        self.delete_target.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        self.delete_target.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(employee) = self.delete_target.get_untracked() {
            self.delete_target.set(None);
            self.deleting_id.set(Some(employee.id.clone()));
            self.delete_action.dispatch(employee);
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{fixtures, ssr::with_runtime};

    fn seeded_view_model() -> EmployeesViewModel {
        leptos_reactive::suppress_resource_load(true);
        let vm = use_employees_view_model();
        vm.employees.set(vec![
            fixtures::employee("EMP001", "Alice Johnson", "alice@example.com", "Engineering"),
            fixtures::employee("EMP002", "Bob Smith", "bob@example.com", "Sales"),
        ]);
        vm
    }

    #[test]
    fn declining_the_delete_confirmation_changes_nothing() {
        with_runtime(|| {
            let vm = seeded_view_model();
            let before = vm.employees.get_untracked();

            vm.request_delete(before[0].clone());
            assert!(vm.delete_target.get_untracked().is_some());

            vm.cancel_delete();
            assert!(vm.delete_target.get_untracked().is_none());
            assert!(vm.deleting_id.get_untracked().is_none());
            assert_eq!(vm.employees.get_untracked(), before);
        });
    }

    #[test]
    fn invalid_form_never_dispatches_the_create_action() {
        with_runtime(|| {
            let vm = seeded_view_model();
            vm.open_form();
            vm.submit();

            assert!(!vm.form_errors.get_untracked().is_empty());
            assert!(vm.create_action.value().get_untracked().is_none());
            assert!(!vm.create_action.pending().get_untracked());
            assert_eq!(vm.employees.get_untracked().len(), 2);
        });
    }

    #[test]
    fn search_projection_leaves_the_collection_intact() {
        with_runtime(|| {
            let vm = seeded_view_model();
            let filtered = vm.filtered();

            vm.search.set("bob".into());
            assert_eq!(filtered.get_untracked().len(), 1);
            assert_eq!(vm.employees.get_untracked().len(), 2);

            vm.search.set(String::new());
            assert_eq!(filtered.get_untracked().len(), 2);
        });
    }
}
