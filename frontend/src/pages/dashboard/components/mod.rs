mod recent;
mod stat_cards;

pub use recent::{RecentAttendance, RecentEmployees};
pub use stat_cards::StatCards;
