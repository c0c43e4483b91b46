// src/application/ports/util.rs
use crate::domain::user::UserId;

pub trait AvatarUrlGenerator: Send + Sync {
    /// Picture shown for users that never uploaded one.
    fn default_for(&self, user_id: UserId) -> String;
}
