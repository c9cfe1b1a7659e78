use serde::{Deserialize, Serialize};

use super::role::Role;

/// The persisted mapping exactly as stored under the session key.
/// Defaults keep partial records parseable; validation happens in the
/// resolver, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub team: String,
}

/// The resolved manager identity, threaded explicitly through every
/// gated operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub team: String,
}

impl Session {
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.to_string(),
            team: self.team.clone(),
        }
    }
}
