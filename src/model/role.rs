use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The two manager roles. Approvers may decide leave requests; viewers
/// see the same data read-only.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Approver,
    Viewer,
}

impl Role {
    /// Unknown or empty role strings fail closed to read-only access.
    pub fn from_label(label: &str) -> Self {
        label.trim().parse().unwrap_or(Role::Viewer)
    }
}
