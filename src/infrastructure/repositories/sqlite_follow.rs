use super::{
    map_sqlx,
    sqlite_user::{UserSummaryRow, into_summaries},
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::follow::{FollowCounts, FollowEdge, FollowRepository};
use crate::domain::user::{UserId, UserSummary};
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct SqliteFollowRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteFollowRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn to_count(value: i64) -> DomainResult<u64> {
    u64::try_from(value).map_err(|err| DomainError::Persistence(err.to_string()))
}

#[async_trait]
impl FollowRepository for SqliteFollowRepository {
    async fn insert(&self, edge: FollowEdge) -> DomainResult<()> {
        sqlx::query("INSERT INTO follows (follower_id, followee_id, created_at) VALUES (?, ?, ?)")
            .bind(i64::from(edge.follower_id))
            .bind(i64::from(edge.followee_id))
            .bind(edge.created_at)
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn delete(&self, follower_id: UserId, followee_id: UserId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM follows WHERE follower_id = ? AND followee_id = ?")
            .bind(i64::from(follower_id))
            .bind(i64::from(followee_id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, follower_id: UserId, followee_id: UserId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM follows WHERE follower_id = ? AND followee_id = ?)",
        )
        .bind(i64::from(follower_id))
        .bind(i64::from(followee_id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_followers(&self, user_id: UserId) -> DomainResult<Vec<UserSummary>> {
        let rows = sqlx::query_as::<_, UserSummaryRow>(
            "SELECT u.id, u.name, u.email, u.profile_pic_url FROM follows f JOIN users u ON u.id = f.follower_id WHERE f.followee_id = ? ORDER BY f.created_at DESC, u.id DESC",
        )
        .bind(i64::from(user_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        into_summaries(rows)
    }

    async fn list_following(&self, user_id: UserId) -> DomainResult<Vec<UserSummary>> {
        let rows = sqlx::query_as::<_, UserSummaryRow>(
            "SELECT u.id, u.name, u.email, u.profile_pic_url FROM follows f JOIN users u ON u.id = f.followee_id WHERE f.follower_id = ? ORDER BY f.created_at DESC, u.id DESC",
        )
        .bind(i64::from(user_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        into_summaries(rows)
    }

    async fn counts(&self, user_id: UserId) -> DomainResult<FollowCounts> {
        let (followers, following): (i64, i64) = sqlx::query_as(
            "SELECT (SELECT COUNT(*) FROM follows WHERE followee_id = ?), (SELECT COUNT(*) FROM follows WHERE follower_id = ?)",
        )
        .bind(i64::from(user_id))
        .bind(i64::from(user_id))
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(FollowCounts {
            followers: to_count(followers)?,
            following: to_count(following)?,
        })
    }
}
