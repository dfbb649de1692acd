use std::rc::Rc;

use futures::future::try_join3;

use crate::api::{
    ApiClient, AttendanceFilter, AttendanceRecord, DashboardStats, Employee,
};

const RECENT_EMPLOYEES: usize = 5;
const RECENT_RECORDS: usize = 8;

/// Everything the dashboard shows, loaded in one round of concurrent calls.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub recent_employees: Vec<Employee>,
    pub recent_attendance: Vec<AttendanceRecord>,
}

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// The three fetches run concurrently; any failure fails the whole load
    /// so the page shows a single retryable error.
    pub async fn fetch_dashboard(&self) -> Result<DashboardData, String> {
        let (stats, employees, attendance) = try_join3(
            self.client.get_dashboard_stats(),
            self.client.list_employees(),
            self.client.list_attendance(&AttendanceFilter::default()),
        )
        .await?;
        Ok(DashboardData {
            stats,
            recent_employees: take_recent(employees.employees, RECENT_EMPLOYEES),
            recent_attendance: take_recent(attendance.records, RECENT_RECORDS),
        })
    }
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// The store returns both lists newest first, so "recent" is a prefix.
fn take_recent<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_recent_keeps_the_newest_prefix() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(take_recent(items, 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn take_recent_handles_short_lists() {
        let items = vec!["a", "b"];
        assert_eq!(take_recent(items.clone(), 8), items);
        assert!(take_recent(Vec::<&str>::new(), 8).is_empty());
    }
}
