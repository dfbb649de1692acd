mod employee_form;
mod table;

pub use employee_form::EmployeeForm;
pub use table::EmployeeTable;
