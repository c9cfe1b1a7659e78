use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LeaveType {
    Annual,
    Sick,
    Casual,
    Unpaid,
}

/// Dates stay free text: the request form captures them the way the
/// employee wrote them ("12 Aug - 16 Aug").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: u64,
    pub employee: String,
    pub leave_type: LeaveType,
    pub date_range: String,
    pub reason: String,
    pub status: LeaveStatus,
    pub handover: String,
    pub decided_by: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
}
