use chrono::NaiveDate;

use crate::{
    api::{AttendanceCreate, AttendanceFilter, AttendanceRecord, AttendanceStatus},
    utils::time::today,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw filter inputs as the date pickers hold them. Parsed into an
/// [`AttendanceFilter`] only when the user applies the filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterFormState {
    pub employee_id: String,
    pub date_from: String,
    pub date_to: String,
}

impl FilterFormState {
    pub fn is_empty(&self) -> bool {
        self.employee_id.is_empty() && self.date_from.is_empty() && self.date_to.is_empty()
    }

    /// Converts the raw inputs into a transport filter. Unparseable dates are
    /// rejected, as is an inverted range.
    pub fn to_filter(&self) -> Result<AttendanceFilter, String> {
        let date_from = parse_optional_date(&self.date_from)?;
        let date_to = parse_optional_date(&self.date_to)?;
        if let (Some(from), Some(to)) = (date_from, date_to) {
            if from > to {
                return Err("\"From\" date must not be after \"To\" date".to_string());
            }
        }
        let employee_id = Some(self.employee_id.trim().to_string())
            .filter(|id| !id.is_empty());
        Ok(AttendanceFilter {
            employee_id,
            date_from,
            date_to,
        })
    }
}

fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(Some)
        .map_err(|_| format!("Invalid date: {value}"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkFormState {
    pub employee_id: String,
    pub date: String,
    pub status: AttendanceStatus,
}

impl Default for MarkFormState {
    fn default() -> Self {
        Self {
            employee_id: String::new(),
            date: today().format(DATE_FORMAT).to_string(),
            status: AttendanceStatus::Present,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkFormErrors {
    pub employee_id: Option<String>,
    pub date: Option<String>,
}

impl MarkFormErrors {
    pub fn is_empty(&self) -> bool {
        self.employee_id.is_none() && self.date.is_none()
    }
}

impl MarkFormState {
    pub fn validate(&self) -> MarkFormErrors {
        let mut errors = MarkFormErrors::default();
        if self.employee_id.trim().is_empty() {
            errors.employee_id = Some("Employee is required".into());
        }
        match self.date.trim() {
            "" => errors.date = Some("Date is required".into()),
            value => {
                if NaiveDate::parse_from_str(value, DATE_FORMAT).is_err() {
                    errors.date = Some("Invalid date".into());
                }
            }
        }
        errors
    }

    /// Builds the request payload. Call only after [`validate`](Self::validate)
    /// came back clean.
    pub fn to_request(&self) -> Result<AttendanceCreate, String> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| format!("Invalid date: {}", self.date))?;
        Ok(AttendanceCreate {
            employee_id: self.employee_id.trim().to_string(),
            date,
            status: self.status,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// In-place log update after a successful mark: the new record is prepended,
/// matching the newest-first order the store returns.
pub fn apply_marked(list: &mut Vec<AttendanceRecord>, record: AttendanceRecord) {
    list.insert(0, record);
}

/// In-place log update after a successful delete. Removes exactly the
/// matching id; an unknown id leaves the list unchanged.
pub fn apply_removed(list: &mut Vec<AttendanceRecord>, id: &str) {
    list.retain(|record| record.id != id);
}
