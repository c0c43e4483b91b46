use super::map_sqlx;
use crate::domain::candidacy::{
    Candidacy, CandidacyId, CandidacyRepository, CandidacyStatus, CandidacyWithOwner,
    NewCandidacy, ReceivedCandidacy,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::PostId;
use crate::domain::user::{UserId, UserSummary};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const CANDIDACY_COLUMNS: &str = "id, applicant_id, post_id, status, created_at";

#[derive(Clone)]
pub struct SqliteCandidacyRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteCandidacyRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CandidacyRow {
    id: i64,
    applicant_id: i64,
    post_id: i64,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<CandidacyRow> for Candidacy {
    type Error = DomainError;

    fn try_from(row: CandidacyRow) -> Result<Self, Self::Error> {
        Ok(Candidacy {
            id: CandidacyId::new(row.id)?,
            applicant_id: UserId::new(row.applicant_id)?,
            post_id: PostId::new(row.post_id)?,
            status: row
                .status
                .parse()
                .map_err(|_| DomainError::Persistence(format!("unknown status '{}'", row.status)))?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CandidacyWithOwnerRow {
    #[sqlx(flatten)]
    candidacy: CandidacyRow,
    post_owner_id: i64,
}

#[derive(Debug, FromRow)]
struct ReceivedCandidacyRow {
    #[sqlx(flatten)]
    candidacy: CandidacyRow,
    applicant_name: String,
    applicant_email: String,
    applicant_pic: Option<String>,
    post_title: String,
    post_body: String,
}

impl TryFrom<ReceivedCandidacyRow> for ReceivedCandidacy {
    type Error = DomainError;

    fn try_from(row: ReceivedCandidacyRow) -> Result<Self, Self::Error> {
        let candidacy = Candidacy::try_from(row.candidacy)?;
        Ok(ReceivedCandidacy {
            applicant: UserSummary {
                id: candidacy.applicant_id,
                name: row.applicant_name,
                email: row.applicant_email,
                profile_pic_url: row.applicant_pic,
            },
            candidacy,
            post_title: row.post_title,
            post_body: row.post_body,
        })
    }
}

#[async_trait]
impl CandidacyRepository for SqliteCandidacyRepository {
    async fn insert(&self, candidacy: NewCandidacy) -> DomainResult<Candidacy> {
        let row = sqlx::query_as::<_, CandidacyRow>(&format!(
            "INSERT INTO candidacies (applicant_id, post_id, status, created_at) VALUES (?, ?, ?, ?) RETURNING {CANDIDACY_COLUMNS}"
        ))
        .bind(i64::from(candidacy.applicant_id))
        .bind(i64::from(candidacy.post_id))
        .bind(candidacy.status().as_str())
        .bind(candidacy.created_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Candidacy::try_from(row)
    }

    async fn find_with_owner(&self, id: CandidacyId) -> DomainResult<Option<CandidacyWithOwner>> {
        let row = sqlx::query_as::<_, CandidacyWithOwnerRow>(
            "SELECT c.id, c.applicant_id, c.post_id, c.status, c.created_at, p.owner_id AS post_owner_id FROM candidacies c JOIN posts p ON p.id = c.post_id WHERE c.id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(|row| {
            Ok(CandidacyWithOwner {
                candidacy: Candidacy::try_from(row.candidacy)?,
                post_owner_id: UserId::new(row.post_owner_id)?,
            })
        })
        .transpose()
    }

    async fn update_status(
        &self,
        id: CandidacyId,
        status: CandidacyStatus,
    ) -> DomainResult<Candidacy> {
        let row = sqlx::query_as::<_, CandidacyRow>(&format!(
            "UPDATE candidacies SET status = ? WHERE id = ? RETURNING {CANDIDACY_COLUMNS}"
        ))
        .bind(status.as_str())
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("candidacy not found".into()))?;

        Candidacy::try_from(row)
    }

    async fn list_received(
        &self,
        owner_id: UserId,
        status: Option<CandidacyStatus>,
    ) -> DomainResult<Vec<ReceivedCandidacy>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT c.id, c.applicant_id, c.post_id, c.status, c.created_at, \
             u.name AS applicant_name, u.email AS applicant_email, u.profile_pic_url AS applicant_pic, \
             p.title AS post_title, p.body AS post_body \
             FROM candidacies c \
             JOIN posts p ON p.id = c.post_id \
             JOIN users u ON u.id = c.applicant_id \
             WHERE p.owner_id = ",
        );
        builder.push_bind(i64::from(owner_id));
        if let Some(status) = status {
            builder.push(" AND c.status = ");
            builder.push_bind(status.as_str());
        }
        builder.push(" ORDER BY c.created_at DESC, c.id DESC");

        let rows = builder
            .build_query_as::<ReceivedCandidacyRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ReceivedCandidacy::try_from).collect()
    }
}
