use crate::api::{Employee, EmployeeCreate, DEPARTMENTS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormErrors {
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
}

impl EmployeeFormErrors {
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.full_name.is_none()
            && self.email.is_none()
            && self.department.is_none()
    }
}

impl EmployeeFormState {
    /// Pre-submission validation. Annotates exactly the offending fields and
    /// never touches the transport layer.
    pub fn validate(&self) -> EmployeeFormErrors {
        let mut errors = EmployeeFormErrors::default();
        if self.id.trim().is_empty() {
            errors.id = Some("Employee ID is required".into());
        }
        if self.full_name.trim().is_empty() {
            errors.full_name = Some("Full name is required".into());
        }
        if self.email.trim().is_empty() {
            errors.email = Some("Email is required".into());
        } else if !is_valid_email(self.email.trim()) {
            errors.email = Some("Invalid email format".into());
        }
        if !DEPARTMENTS.contains(&self.department.as_str()) {
            errors.department = Some("Department is required".into());
        }
        errors
    }

    pub fn to_request(&self) -> EmployeeCreate {
        EmployeeCreate {
            id: self.id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Accepts the `local@domain.tld` shape: exactly one `@`, no whitespace, and
/// a dot-separated domain with non-empty segments.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|segment| !segment.is_empty())
}

/// In-place roster update after a successful create: the new record is
/// prepended, matching the newest-first order the store returns.
pub fn apply_created(list: &mut Vec<Employee>, employee: Employee) {
    list.insert(0, employee);
}

/// In-place roster update after a successful delete. Removes exactly the
/// matching id; an unknown id leaves the list unchanged.
pub fn apply_removed(list: &mut Vec<Employee>, id: &str) {
    list.retain(|e| e.id != id);
}

/// Case-insensitive substring search across name, email, department and id.
/// A display projection only — the loaded collection is never altered.
pub fn filter_employees(employees: &[Employee], search: &str) -> Vec<Employee> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return employees.to_vec();
    }
    employees
        .iter()
        .filter(|e| {
            e.full_name.to_lowercase().contains(&needle)
                || e.email.to_lowercase().contains(&needle)
                || e.department.to_lowercase().contains(&needle)
                || e.id.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::fixtures::employee;

    #[test]
    fn created_employee_is_prepended_and_counted() {
        let mut list = vec![
            employee("EMP001", "Alice Johnson", "alice@example.com", "Engineering"),
            employee("EMP002", "Bob Smith", "bob@example.com", "Sales"),
        ];
        apply_created(
            &mut list,
            employee("EMP003", "Carol White", "carol@example.com", "HR"),
        );
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].id, "EMP003");
        assert_eq!(list[1].id, "EMP001");
    }

    #[test]
    fn removal_targets_exactly_the_matching_id() {
        let mut list = vec![
            employee("EMP001", "Alice Johnson", "alice@example.com", "Engineering"),
            employee("EMP002", "Bob Smith", "bob@example.com", "Sales"),
        ];
        apply_removed(&mut list, "EMP001");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "EMP002");
    }

    #[test]
    fn removal_of_unknown_id_is_a_no_op() {
        let mut list = vec![employee(
            "EMP001",
            "Alice Johnson",
            "alice@example.com",
            "Engineering",
        )];
        apply_removed(&mut list, "EMP999");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "EMP001");
    }

    #[test]
    fn blank_form_flags_every_field() {
        let errors = EmployeeFormState::default().validate();
        assert!(errors.id.is_some());
        assert!(errors.full_name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.department.is_some());
    }

    #[test]
    fn missing_email_flags_only_that_field() {
        let form = EmployeeFormState {
            id: "EMP001".into(),
            full_name: "Jane Doe".into(),
            email: "".into(),
            department: "Engineering".into(),
        };
        let errors = form.validate();
        assert!(errors.email.is_some());
        assert!(errors.id.is_none());
        assert!(errors.full_name.is_none());
        assert!(errors.department.is_none());
    }

    #[test]
    fn department_must_come_from_the_fixed_list() {
        let form = EmployeeFormState {
            id: "EMP001".into(),
            full_name: "Jane Doe".into(),
            email: "jane@company.com".into(),
            department: "Astrology".into(),
        };
        assert!(form.validate().department.is_some());
    }

    #[test]
    fn valid_form_produces_trimmed_request() {
        let form = EmployeeFormState {
            id: " EMP001 ".into(),
            full_name: " Jane Doe ".into(),
            email: " jane@company.com ".into(),
            department: "Engineering".into(),
        };
        assert!(form.validate().is_empty());
        let request = form.to_request();
        assert_eq!(request.id, "EMP001");
        assert_eq!(request.email, "jane@company.com");
    }

    #[test]
    fn email_shape_checks() {
        assert!(is_valid_email("jane@company.com"));
        assert!(is_valid_email("j.doe@sub.company.co"));
        assert!(!is_valid_email("jane"));
        assert!(!is_valid_email("jane@company"));
        assert!(!is_valid_email("@company.com"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane doe@company.com"));
        assert!(!is_valid_email("jane@comp@ny.com"));
    }

    #[test]
    fn search_is_case_insensitive_and_idempotent() {
        let employees = vec![
            employee("EMP001", "Alice Engineer", "alice@company.com", "Engineering"),
            employee("EMP002", "Bob Seller", "bob@company.com", "Sales"),
        ];
        let upper = filter_employees(&employees, "ENG");
        let lower = filter_employees(&employees, "eng");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].id, "EMP001");
    }

    #[test]
    fn clearing_search_restores_full_collection() {
        let employees = vec![
            employee("EMP001", "Alice Engineer", "alice@company.com", "Engineering"),
            employee("EMP002", "Bob Seller", "bob@company.com", "Sales"),
        ];
        assert_eq!(filter_employees(&employees, "").len(), 2);
        assert_eq!(filter_employees(&employees, "  ").len(), 2);
    }

    #[test]
    fn search_matches_id_and_email() {
        let employees = vec![employee(
            "EMP042",
            "Alice Engineer",
            "alice@company.com",
            "Engineering",
        )];
        assert_eq!(filter_employees(&employees, "emp042").len(), 1);
        assert_eq!(filter_employees(&employees, "ALICE@").len(), 1);
        assert!(filter_employees(&employees, "zzz").is_empty());
    }
}
