use tracing::warn;

use crate::error::HrError;
use crate::model::role::Role;
use crate::model::session::{Session, SessionRecord};
use crate::seed;
use crate::store::SessionStore;

/// The identity used when nothing usable is stored: the second seed
/// manager account, a read-only profile.
pub fn default_session() -> Session {
    seed::MANAGERS[1].clone()
}

/// Read and validate the persisted session record.
///
/// Every failure path degrades to the default identity; the caller never
/// sees an error. A session is usable only if it parses and carries a
/// non-empty id and name.
pub fn resolve_session(store: &dyn SessionStore, key: &str) -> Session {
    let Some(text) = store.get(key) else {
        return default_session();
    };

    let record: SessionRecord = match serde_json::from_str(&text) {
        Ok(record) => record,
        Err(e) => {
            warn!(error = %e, "Stored session unreadable, falling back to default");
            return default_session();
        }
    };

    if record.id.trim().is_empty() || record.name.trim().is_empty() {
        warn!("Stored session missing id or name, falling back to default");
        return default_session();
    }

    Session {
        id: record.id,
        name: record.name,
        email: record.email,
        role: Role::from_label(&record.role),
        team: record.team,
    }
}

/// Write the session back under the fixed key, e.g. on profile switch.
/// Unlike the read path, write failures are surfaced.
pub fn persist_session(
    store: &mut dyn SessionStore,
    key: &str,
    session: &Session,
) -> Result<(), HrError> {
    let text = serde_json::to_string(&session.to_record())?;
    store.set(key, &text)
}
