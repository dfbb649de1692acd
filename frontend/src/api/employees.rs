use super::{
    client::ApiClient,
    types::{DashboardStats, Employee, EmployeeCreate, EmployeeListResponse},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<EmployeeListResponse, String> {
        let base_url = self.resolved_base_url().await;
        let request = self.http_client().get(format!("{}/employees/list", base_url));
        self.send_json(request).await
    }

    pub async fn get_employee(&self, id: &str) -> Result<Employee, String> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .get(format!("{}/employees/get/{}", base_url, id));
        self.send_json(request).await
    }

    pub async fn create_employee(&self, payload: EmployeeCreate) -> Result<Employee, String> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .post(format!("{}/employees/create", base_url))
            .json(&payload);
        self.send_json(request).await
    }

    pub async fn delete_employee(&self, id: &str) -> Result<(), String> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .delete(format!("{}/employees/delete/{}", base_url, id));
        self.send_empty(request).await
    }

    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, String> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .get(format!("{}/employees/dashboard", base_url));
        self.send_json(request).await
    }
}
