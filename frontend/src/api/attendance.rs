use chrono::NaiveDate;

use super::{
    client::ApiClient,
    types::{AttendanceCreate, AttendanceListResponse, AttendanceRecord},
};

/// Server-applied filters for the attendance list. All fields are optional
/// and combinable; dates are inclusive bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub employee_id: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl AttendanceFilter {
    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(employee_id) = &self.employee_id {
            params.push(("employee_id", employee_id.clone()));
        }
        if let Some(from) = self.date_from {
            params.push(("date_from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.date_to {
            params.push(("date_to", to.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

impl ApiClient {
    pub async fn list_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<AttendanceListResponse, String> {
        let base_url = self.resolved_base_url().await;
        let params = filter.query_params();
        let mut request = self
            .http_client()
            .get(format!("{}/attendance/list", base_url));
        if !params.is_empty() {
            request = request.query(&params);
        }
        self.send_json(request).await
    }

    pub async fn mark_attendance(
        &self,
        payload: AttendanceCreate,
    ) -> Result<AttendanceRecord, String> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .post(format!("{}/attendance/mark", base_url))
            .json(&payload);
        self.send_json(request).await
    }

    pub async fn delete_attendance(&self, id: &str) -> Result<(), String> {
        let base_url = self.resolved_base_url().await;
        let request = self
            .http_client()
            .delete(format!("{}/attendance/delete/{}", base_url, id));
        self.send_empty(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_skips_missing_values() {
        let params = AttendanceFilter::default().query_params();
        assert!(params.is_empty());
    }

    #[test]
    fn filter_includes_every_set_value() {
        let filter = AttendanceFilter {
            employee_id: Some("EMP001".into()),
            date_from: NaiveDate::from_ymd_opt(2025, 3, 1),
            date_to: NaiveDate::from_ymd_opt(2025, 3, 31),
        };
        let params = filter.query_params();
        assert!(params.contains(&("employee_id", "EMP001".to_string())));
        assert!(params.contains(&("date_from", "2025-03-01".to_string())));
        assert!(params.contains(&("date_to", "2025-03-31".to_string())));
    }
}
