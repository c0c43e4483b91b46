use crate::domain::candidacy::value_objects::{CandidacyId, CandidacyStatus, Decision};
use crate::domain::post::PostId;
use crate::domain::user::{UserId, UserSummary};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Candidacy {
    pub id: CandidacyId,
    pub applicant_id: UserId,
    pub post_id: PostId,
    pub status: CandidacyStatus,
    pub created_at: DateTime<Utc>,
}

impl Candidacy {
    /// Overwrites the status. Re-resolving an already resolved candidacy is
    /// allowed and simply replaces the previous outcome.
    pub fn resolve(&mut self, decision: Decision) {
        self.status = decision.resulting_status();
    }
}

#[derive(Debug, Clone)]
pub struct NewCandidacy {
    pub applicant_id: UserId,
    pub post_id: PostId,
    pub created_at: DateTime<Utc>,
}

impl NewCandidacy {
    pub fn status(&self) -> CandidacyStatus {
        CandidacyStatus::Pending
    }
}

/// A candidacy together with the owner of the post it targets.
#[derive(Debug, Clone)]
pub struct CandidacyWithOwner {
    pub candidacy: Candidacy,
    pub post_owner_id: UserId,
}

/// Read model for the post owner's inbox.
#[derive(Debug, Clone)]
pub struct ReceivedCandidacy {
    pub candidacy: Candidacy,
    pub applicant: UserSummary,
    pub post_title: String,
    pub post_body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Candidacy {
        Candidacy {
            id: CandidacyId::new(1).unwrap(),
            applicant_id: UserId::new(2).unwrap(),
            post_id: PostId::new(3).unwrap(),
            status: CandidacyStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn resolve_sets_status() {
        let mut candidacy = sample();
        candidacy.resolve(Decision::Accept);
        assert_eq!(candidacy.status, CandidacyStatus::Accepted);
    }

    #[test]
    fn resolve_overwrites_previous_outcome() {
        let mut candidacy = sample();
        candidacy.resolve(Decision::Accept);
        candidacy.resolve(Decision::Reject);
        assert_eq!(candidacy.status, CandidacyStatus::Rejected);
    }
}
