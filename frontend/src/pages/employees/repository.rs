use std::rc::Rc;

use crate::api::{ApiClient, Employee, EmployeeCreate};

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Vec<Employee>, String> {
        let response = self.client.list_employees().await?;
        Ok(response.employees)
    }

    pub async fn add_employee(&self, payload: EmployeeCreate) -> Result<Employee, String> {
        self.client.create_employee(payload).await
    }

    pub async fn remove_employee(&self, id: &str) -> Result<(), String> {
        self.client.delete_employee(id).await
    }
}
