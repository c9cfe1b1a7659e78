use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::error::HrError;
use crate::model::leave::{LeaveRequest, LeaveStatus, LeaveType};
use crate::model::session::Session;
use crate::seed;
use crate::utils::search;

#[derive(Debug, Deserialize)]
pub struct NewLeave {
    pub employee: String,
    pub leave_type: LeaveType,
    pub date_range: String,
    pub reason: String,
    pub handover: String,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    fn status(self) -> LeaveStatus {
        match self {
            Decision::Approve => LeaveStatus::Approved,
            Decision::Reject => LeaveStatus::Rejected,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LeaveFilter {
    /// Filter by request status
    pub status: Option<LeaveStatus>,
    /// Filter by employee name substring
    pub employee: Option<String>,
    /// Pagination page number (start with 1)
    pub page: Option<u64>,
    /// Pagination per page number
    pub per_page: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct LeavePage {
    pub data: Vec<LeaveRequest>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// Owner of the leave request collection for one page instance.
pub struct LeaveDesk {
    requests: Vec<LeaveRequest>,
    next_id: u64,
}

impl LeaveDesk {
    pub fn seeded() -> Self {
        let requests = seed::LEAVE_REQUESTS.clone();
        let next_id = requests.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self { requests, next_id }
    }

    pub fn empty() -> Self {
        Self {
            requests: Vec::new(),
            next_id: 1,
        }
    }

    pub fn requests(&self) -> &[LeaveRequest] {
        &self.requests
    }

    pub fn get(&self, id: u64) -> Option<&LeaveRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn pending(&self) -> impl Iterator<Item = &LeaveRequest> {
        self.requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Pending)
    }

    /* =========================
    Submit leave request
    ========================= */
    pub fn submit(&mut self, new: NewLeave) -> Result<&LeaveRequest, HrError> {
        if new.employee.trim().is_empty() {
            return Err(HrError::MissingEmployee);
        }
        if new.date_range.trim().is_empty() {
            return Err(HrError::MissingDates);
        }

        let id = self.next_id;
        self.next_id += 1;

        self.requests.push(LeaveRequest {
            id,
            employee: new.employee,
            leave_type: new.leave_type,
            date_range: new.date_range,
            reason: new.reason,
            status: LeaveStatus::Pending,
            handover: new.handover,
            decided_by: None,
            decided_at: None,
        });

        info!(id, "Leave request submitted");
        Ok(&self.requests[self.requests.len() - 1])
    }

    /* =========================
    Approve / reject (approver only)
    ========================= */
    /// Decide a pending request. Only the addressed request is touched:
    /// status, decided_by (= session name) and decided_at are set, all
    /// other requests stay as they were. A request that already left
    /// `Pending` cannot be decided again.
    pub fn decide(
        &mut self,
        id: u64,
        decision: Decision,
        session: &Session,
    ) -> Result<&LeaveRequest, HrError> {
        session.require_approver()?;

        let Some(idx) = self.requests.iter().position(|r| r.id == id) else {
            return Err(HrError::LeaveNotFound(id));
        };
        if self.requests[idx].status != LeaveStatus::Pending {
            return Err(HrError::AlreadyDecided(id, self.requests[idx].status));
        }

        let request = &mut self.requests[idx];
        request.status = decision.status();
        request.decided_by = Some(session.name.clone());
        request.decided_at = Some(Utc::now());

        info!(id, status = %request.status, decided_by = %session.name, "Leave request decided");
        Ok(&self.requests[idx])
    }

    /* =========================
    Filtered listing
    ========================= */
    /// Newest requests first, optionally narrowed by status and employee
    /// name substring. `total` counts matches before pagination.
    pub fn list(&self, filter: &LeaveFilter, config: &Config) -> LeavePage {
        let per_page = filter.per_page.unwrap_or(config.per_page).min(config.max_per_page);
        let page = filter.page.unwrap_or(1).max(1);

        let mut matched: Vec<&LeaveRequest> = self
            .requests
            .iter()
            .filter(|r| filter.status.is_none_or(|s| r.status == s))
            .filter(|r| {
                filter
                    .employee
                    .as_deref()
                    .is_none_or(|q| search::contains(&r.employee, q))
            })
            .collect();
        matched.reverse();

        let total = matched.len() as u64;
        let data = matched
            .into_iter()
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .cloned()
            .collect();

        LeavePage {
            data,
            page,
            per_page,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approver() -> Session {
        seed::MANAGERS[0].clone()
    }

    fn viewer() -> Session {
        seed::MANAGERS[1].clone()
    }

    fn test_config() -> Config {
        Config {
            store_path: "unused".to_string(),
            session_key: "unused".to_string(),
            log_dir: "unused".to_string(),
            per_page: 10,
            max_per_page: 100,
        }
    }

    #[test]
    fn approver_decision_touches_only_the_addressed_request() {
        let mut desk = LeaveDesk::seeded();
        let before: Vec<LeaveRequest> = desk.requests().to_vec();
        let session = approver();

        let decided = desk.decide(2, Decision::Approve, &session).unwrap();
        assert_eq!(decided.status, LeaveStatus::Approved);
        assert_eq!(decided.decided_by.as_deref(), Some(session.name.as_str()));
        assert!(decided.decided_at.is_some());

        for (was, is) in before.iter().zip(desk.requests()) {
            if was.id == 2 {
                continue;
            }
            assert_eq!(was.status, is.status);
            assert_eq!(was.decided_by, is.decided_by);
            assert_eq!(was.decided_at, is.decided_at);
        }
    }

    #[test]
    fn viewer_decision_is_rejected_and_changes_nothing() {
        let mut desk = LeaveDesk::seeded();
        let before: Vec<LeaveRequest> = desk.requests().to_vec();

        let err = desk.decide(2, Decision::Reject, &viewer()).unwrap_err();
        assert!(matches!(err, HrError::ApproverRequired));

        for (was, is) in before.iter().zip(desk.requests()) {
            assert_eq!(was.status, is.status);
            assert_eq!(was.decided_by, is.decided_by);
        }
    }

    #[test]
    fn decided_request_cannot_be_decided_again() {
        let mut desk = LeaveDesk::seeded();
        let session = approver();

        desk.decide(3, Decision::Reject, &session).unwrap();
        let err = desk.decide(3, Decision::Approve, &session).unwrap_err();

        assert!(matches!(
            err,
            HrError::AlreadyDecided(3, LeaveStatus::Rejected)
        ));
        assert_eq!(desk.get(3).unwrap().status, LeaveStatus::Rejected);
    }

    #[test]
    fn unknown_id_reports_not_found() {
        let mut desk = LeaveDesk::seeded();
        let err = desk.decide(999, Decision::Approve, &approver()).unwrap_err();
        assert!(matches!(err, HrError::LeaveNotFound(999)));
    }

    #[test]
    fn submit_appends_one_pending_request() {
        let mut desk = LeaveDesk::seeded();
        let count = desk.requests().len();

        let id = desk
            .submit(NewLeave {
                employee: "Arjun Patel".to_string(),
                leave_type: LeaveType::Annual,
                date_range: "22 Sep - 26 Sep".to_string(),
                reason: "Trekking trip".to_string(),
                handover: "Karan Gupta".to_string(),
            })
            .unwrap()
            .id;

        assert_eq!(desk.requests().len(), count + 1);
        let request = desk.get(id).unwrap();
        assert_eq!(request.status, LeaveStatus::Pending);
        assert_eq!(request.employee, "Arjun Patel");
        assert!(request.decided_by.is_none());
    }

    #[test]
    fn submit_requires_employee_and_dates() {
        let mut desk = LeaveDesk::empty();

        let err = desk
            .submit(NewLeave {
                employee: "  ".to_string(),
                leave_type: LeaveType::Sick,
                date_range: "5 Aug".to_string(),
                reason: String::new(),
                handover: String::new(),
            })
            .unwrap_err();
        assert!(matches!(err, HrError::MissingEmployee));

        let err = desk
            .submit(NewLeave {
                employee: "Priya Desai".to_string(),
                leave_type: LeaveType::Sick,
                date_range: String::new(),
                reason: String::new(),
                handover: String::new(),
            })
            .unwrap_err();
        assert!(matches!(err, HrError::MissingDates));
        assert!(desk.requests().is_empty());
    }

    #[test]
    fn list_filters_by_status_and_paginates_newest_first() {
        let desk = LeaveDesk::seeded();
        let config = test_config();

        let pending = desk.list(
            &LeaveFilter {
                status: Some(LeaveStatus::Pending),
                ..Default::default()
            },
            &config,
        );
        assert_eq!(pending.total, 3);
        assert!(pending.data.iter().all(|r| r.status == LeaveStatus::Pending));
        // Highest id (latest submission) comes first.
        assert_eq!(pending.data[0].id, 5);

        let second_page = desk.list(
            &LeaveFilter {
                page: Some(2),
                per_page: Some(2),
                ..Default::default()
            },
            &config,
        );
        assert_eq!(second_page.total, 5);
        assert_eq!(second_page.data.len(), 2);
        assert_eq!(second_page.data[0].id, 3);
    }

    #[test]
    fn list_filters_by_employee_substring() {
        let desk = LeaveDesk::seeded();
        let page = desk.list(
            &LeaveFilter {
                employee: Some("priya".to_string()),
                ..Default::default()
            },
            &test_config(),
        );

        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].employee, "Priya Desai");
    }
}
