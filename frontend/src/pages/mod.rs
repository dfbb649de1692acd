pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod home;

pub use attendance::AttendancePanel;
pub use dashboard::DashboardPanel;
pub use employees::EmployeesPanel;
pub use home::HomePage;
