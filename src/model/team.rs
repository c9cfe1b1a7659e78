use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::leave::LeaveType;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
pub enum Availability {
    Available,
    #[serde(rename = "On Leave")]
    #[strum(serialize = "On Leave")]
    OnLeave,
}

/// Roster entry. Seeded once, never mutated by any flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u64,
    pub name: String,
    pub title: String,
    pub availability: Availability,
    pub leave_type: Option<LeaveType>,
    pub leave_dates: Option<String>,
    pub location: String,
}
