use thiserror::Error;

use crate::model::leave::LeaveStatus;

/// Everything a desk operation can refuse with. The document variants
/// carry the exact texts the shell shows as blocking alerts.
#[derive(Debug, Error)]
pub enum HrError {
    #[error("approver role required")]
    ApproverRequired,

    #[error("leave request {0} not found")]
    LeaveNotFound(u64),

    #[error("leave request {0} is already {1}")]
    AlreadyDecided(u64, LeaveStatus),

    #[error("employee name is required")]
    MissingEmployee,

    #[error("leave dates are required")]
    MissingDates,

    #[error("Please enter a document title")]
    MissingTitle,

    #[error("Please choose a file to upload")]
    NoFileSelected,

    #[error("session store i/o: {0}")]
    Store(#[from] std::io::Error),

    #[error("session store encoding: {0}")]
    StoreEncoding(#[from] serde_json::Error),
}
