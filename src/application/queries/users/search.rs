use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::ApplicationResult,
};

pub struct SearchUsersQuery {
    pub term: Option<String>,
}

impl UserQueryService {
    pub const SEARCH_LIMIT: u32 = 10;

    /// Name or email substring match, never returning the actor.
    pub async fn search_users(
        &self,
        actor: &AuthenticatedUser,
        query: SearchUsersQuery,
    ) -> ApplicationResult<Vec<UserDto>> {
        let term = query.term.as_deref().map(str::trim).unwrap_or_default();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let found = self
            .user_repo
            .search(term, actor.id, Self::SEARCH_LIMIT)
            .await?;
        Ok(UserDto::from_summaries(found, self.avatars.as_ref()))
    }
}
