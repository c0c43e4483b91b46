use crate::application::ports::util::AvatarUrlGenerator;
use crate::domain::candidacy::{Candidacy, ReceivedCandidacy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{UserDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CandidacyDto {
    pub id: i64,
    pub post_id: i64,
    #[serde(rename = "user_id")]
    pub applicant_id: i64,
    /// `pending`, `accepted` or `rejected`.
    pub status: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Candidacy> for CandidacyDto {
    fn from(value: Candidacy) -> Self {
        Self {
            id: value.id.into(),
            post_id: value.post_id.into(),
            applicant_id: value.applicant_id.into(),
            status: value.status.as_str().to_string(),
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CandidacyPostDto {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "texto")]
    pub body: String,
}

/// One entry of the post owner's inbox.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReceivedCandidacyDto {
    pub id: i64,
    pub status: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "candidato")]
    pub applicant: UserDto,
    pub post: CandidacyPostDto,
}

impl ReceivedCandidacyDto {
    pub fn from_received(value: ReceivedCandidacy, avatars: &dyn AvatarUrlGenerator) -> Self {
        let ReceivedCandidacy {
            candidacy,
            applicant,
            post_title,
            post_body,
        } = value;
        Self {
            id: candidacy.id.into(),
            status: candidacy.status.as_str().to_string(),
            created_at: candidacy.created_at,
            applicant: UserDto::from_summary(applicant, avatars),
            post: CandidacyPostDto {
                id: candidacy.post_id.into(),
                title: post_title,
                body: post_body,
            },
        }
    }
}
