use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub struct ListPostsQuery {
    pub limit: Option<u32>,
}

impl PostQueryService {
    pub const DEFAULT_LIMIT: u32 = 50;
    pub const MAX_LIMIT: u32 = 100;

    /// Feed of the most recent posts, newest first.
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Vec<PostDto>> {
        let limit = Self::normalize_limit(query.limit);
        let posts = self.post_repo.list_recent(limit).await?;
        Ok(PostDto::from_posts(posts, self.avatars.as_ref()))
    }

    pub async fn list_posts_by_user(&self, user_id: i64) -> ApplicationResult<Vec<PostDto>> {
        let owner = UserId::new(user_id).map_err(|_| ApplicationError::not_found("user not found"))?;
        if self.user_repo.find_by_id(owner).await?.is_none() {
            return Err(ApplicationError::not_found("user not found"));
        }

        let posts = self.post_repo.list_by_owner(owner).await?;
        Ok(PostDto::from_posts(posts, self.avatars.as_ref()))
    }

    pub(super) fn normalize_limit(limit: Option<u32>) -> u32 {
        limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }
}
