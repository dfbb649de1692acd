use std::rc::Rc;

use crate::api::{
    ApiClient, AttendanceCreate, AttendanceFilter, AttendanceRecord, Employee,
};

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_records(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, String> {
        let response = self.client.list_attendance(filter).await?;
        Ok(response.records)
    }

    /// Roster for the employee dropdowns. A failure here must not take the
    /// page down, so callers degrade to an empty list.
    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, String> {
        let response = self.client.list_employees().await?;
        Ok(response.employees)
    }

    pub async fn add_record(
        &self,
        payload: AttendanceCreate,
    ) -> Result<AttendanceRecord, String> {
        self.client.mark_attendance(payload).await
    }

    pub async fn remove_record(&self, id: &str) -> Result<(), String> {
        self.client.delete_attendance(id).await
    }
}

impl Default for AttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}
