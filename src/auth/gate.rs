use crate::error::HrError;
use crate::model::role::Role;
use crate::model::session::Session;

impl Session {
    /// True iff this manager may decide leave requests.
    pub fn is_approver(&self) -> bool {
        self.role == Role::Approver
    }

    /// The single authorization check. Advisory only: it gates which
    /// affordances the shell renders, nothing stronger.
    pub fn require_approver(&self) -> Result<(), HrError> {
        if self.is_approver() {
            Ok(())
        } else {
            Err(HrError::ApproverRequired)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::role::Role;
    use crate::seed;

    #[test]
    fn gate_is_true_only_for_approver_role() {
        let approver = seed::MANAGERS[0].clone();
        let viewer = seed::MANAGERS[1].clone();

        assert!(approver.is_approver());
        assert!(approver.require_approver().is_ok());

        assert!(!viewer.is_approver());
        assert!(viewer.require_approver().is_err());

        let mut flipped = viewer;
        flipped.role = Role::Approver;
        assert!(flipped.is_approver());
    }
}
