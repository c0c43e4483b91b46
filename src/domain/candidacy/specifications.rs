use crate::domain::post::Post;
use crate::domain::user::UserId;

pub struct CanApplyToPostSpec<'a> {
    post: &'a Post,
    applicant_id: UserId,
}

impl<'a> CanApplyToPostSpec<'a> {
    pub fn new(post: &'a Post, applicant_id: UserId) -> Self {
        Self { post, applicant_id }
    }

    pub fn is_satisfied(&self) -> bool {
        !self.post.is_owned_by(self.applicant_id)
    }
}

/// Only the owner of the targeted post may accept or reject a candidacy.
pub struct CanResolveCandidacySpec {
    post_owner_id: UserId,
    actor_id: UserId,
}

impl CanResolveCandidacySpec {
    pub fn new(post_owner_id: UserId, actor_id: UserId) -> Self {
        Self {
            post_owner_id,
            actor_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.post_owner_id == self.actor_id
    }
}
