use std::rc::Rc;

use leptos::*;

use super::repository::{DashboardData, DashboardRepository};
use crate::api::ApiClient;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub reload: RwSignal<u32>,
    pub dashboard: Resource<u32, Result<DashboardData, String>>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DashboardRepository::new_with_client(Rc::new(api));

    let reload = create_rw_signal(0u32);
    let dashboard = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repository.clone();
            async move { repo.fetch_dashboard().await }
        },
    );

    DashboardViewModel { reload, dashboard }
}

impl DashboardViewModel {
    pub fn retry(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}
