mod attendance;
pub mod client;
mod employees;
pub mod types;

pub use attendance::AttendanceFilter;
pub use client::*;
pub use types::*;
