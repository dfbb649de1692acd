mod filters;
mod mark_form;
mod table;

pub use filters::AttendanceFilters;
pub use mark_form::MarkAttendanceForm;
pub use table::AttendanceTable;
