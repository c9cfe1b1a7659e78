use crate::model::team::{Availability, TeamMember};
use crate::seed;
use crate::utils::search;

/// Read-only view over the roster seed.
pub struct TeamRoster {
    members: Vec<TeamMember>,
}

impl TeamRoster {
    pub fn seeded() -> Self {
        Self {
            members: seed::TEAM.clone(),
        }
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn available(&self) -> Vec<&TeamMember> {
        self.members
            .iter()
            .filter(|m| m.availability == Availability::Available)
            .collect()
    }

    pub fn on_leave(&self) -> Vec<&TeamMember> {
        self.members
            .iter()
            .filter(|m| m.availability == Availability::OnLeave)
            .collect()
    }

    pub fn search(&self, query: &str) -> Vec<&TeamMember> {
        if query.trim().is_empty() {
            return self.members.iter().collect();
        }

        self.members
            .iter()
            .filter(|m| search::contains(&m.name, query))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_split_covers_the_whole_roster() {
        let roster = TeamRoster::seeded();
        assert_eq!(
            roster.available().len() + roster.on_leave().len(),
            roster.members().len()
        );
    }

    #[test]
    fn members_on_leave_carry_their_leave_details() {
        let roster = TeamRoster::seeded();
        for member in roster.on_leave() {
            assert!(member.leave_type.is_some());
            assert!(member.leave_dates.is_some());
        }
    }

    #[test]
    fn name_search_is_case_insensitive() {
        let roster = TeamRoster::seeded();
        let hits = roster.search("SHARMA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Neha Sharma");
    }
}
