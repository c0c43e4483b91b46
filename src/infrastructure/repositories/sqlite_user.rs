use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    DisplayName, Email, NewUser, PasswordHash, ProfileUpdate, User, UserId, UserRepository,
    UserSummary,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const USER_COLUMNS: &str =
    "id, name, email, password_hash, profile_pic_url, bio, links, created_at, last_login_at";

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUserRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    fn build_update_query(update: ProfileUpdate) -> QueryBuilder<'static, Sqlite> {
        let ProfileUpdate {
            id,
            bio,
            links,
            profile_pic_url,
        } = update;

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE users SET ");
        let mut fields = builder.separated(", ");
        for (column, value) in [
            ("bio", bio),
            ("links", links),
            ("profile_pic_url", profile_pic_url),
        ] {
            if let Some(value) = value {
                fields.push(format!("{column} = "));
                fields.push_bind_unseparated(blank_to_null(value));
            }
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {USER_COLUMNS}"));
        builder
    }

    /// `%term%` with LIKE wildcards in the term itself escaped.
    fn like_pattern(term: &str) -> String {
        let mut pattern = String::with_capacity(term.len() + 2);
        pattern.push('%');
        for ch in term.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}

fn blank_to_null(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    profile_pic_url: Option<String>,
    bio: Option<String>,
    links: Option<String>,
    created_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            name: DisplayName::new(row.name)?,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            profile_pic_url: row.profile_pic_url,
            bio: row.bio,
            links: row.links,
            created_at: row.created_at,
            last_login_at: row.last_login_at,
        })
    }
}

/// `id, name, email, profile_pic_url` of a user, shared by every list query.
#[derive(Debug, FromRow)]
pub(super) struct UserSummaryRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub profile_pic_url: Option<String>,
}

impl TryFrom<UserSummaryRow> for UserSummary {
    type Error = DomainError;

    fn try_from(row: UserSummaryRow) -> Result<Self, Self::Error> {
        Ok(UserSummary {
            id: UserId::new(row.id)?,
            name: row.name,
            email: row.email,
            profile_pic_url: row.profile_pic_url,
        })
    }
}

pub(super) fn into_summaries(rows: Vec<UserSummaryRow>) -> DomainResult<Vec<UserSummary>> {
    rows.into_iter().map(UserSummary::try_from).collect()
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            name,
            email,
            password_hash,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (name, email, password_hash, created_at) VALUES (?, ?, ?, ?) RETURNING {USER_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
        ))
        .bind(email.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update_profile(&self, update: ProfileUpdate) -> DomainResult<User> {
        if update.is_empty() {
            return self
                .find_by_id(update.id)
                .await?
                .ok_or_else(|| DomainError::NotFound("user not found".into()));
        }

        let mut builder = Self::build_update_query(update);
        let row = builder
            .build_query_as::<UserRow>()
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query("UPDATE users SET last_login_at = ? WHERE id = ?")
            .bind(at)
            .bind(i64::from(id))
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }

    async fn search(
        &self,
        term: &str,
        exclude: UserId,
        limit: u32,
    ) -> DomainResult<Vec<UserSummary>> {
        let pattern = Self::like_pattern(term);
        let rows = sqlx::query_as::<_, UserSummaryRow>(
            "SELECT id, name, email, profile_pic_url FROM users WHERE id <> ? AND (name LIKE ? ESCAPE '\\' OR email LIKE ? ESCAPE '\\') ORDER BY name, id LIMIT ?",
        )
        .bind(i64::from(exclude))
        .bind(&pattern)
        .bind(&pattern)
        .bind(i64::from(limit))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        into_summaries(rows)
    }
}
