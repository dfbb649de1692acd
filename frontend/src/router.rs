use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    pages::{AttendancePanel, DashboardPanel, EmployeesPanel, HomePage},
    state::toasts::ToastProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/dashboard", "/employees", "/attendance"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! {
        <ToastProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/dashboard" view=DashboardPanel/>
                    <Route path="/employees" view=EmployeesPanel/>
                    <Route path="/attendance" view=AttendancePanel/>
                </Routes>
            </Router>
        </ToastProvider>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_nav_target_has_a_route() {
        for path in ["/dashboard", "/employees", "/attendance"] {
            assert!(ROUTE_PATHS.contains(&path), "missing route: {}", path);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
