use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Directed edge: `follower_id` follows `followee_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowEdge {
    pub follower_id: UserId,
    pub followee_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl FollowEdge {
    pub fn new(
        follower_id: UserId,
        followee_id: UserId,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if follower_id == followee_id {
            return Err(DomainError::Validation("you cannot follow yourself".into()));
        }
        Ok(Self {
            follower_id,
            followee_id,
            created_at,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FollowCounts {
    pub followers: u64,
    pub following: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_loop_is_rejected() {
        let id = UserId::new(4).unwrap();
        let err = FollowEdge::new(id, id, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
