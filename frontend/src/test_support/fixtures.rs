use chrono::{NaiveDate, NaiveDateTime};

use crate::api::{AttendanceRecord, AttendanceStatus, Employee};

fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

pub fn employee(id: &str, full_name: &str, email: &str, department: &str) -> Employee {
    Employee {
        id: id.to_string(),
        full_name: full_name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        created_at: timestamp(),
        total_present: 0,
    }
}

pub fn attendance(
    id: &str,
    employee_id: &str,
    date: NaiveDate,
    status: AttendanceStatus,
) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        employee_name: None,
        date,
        status,
        created_at: timestamp(),
    }
}
