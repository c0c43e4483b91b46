use crate::application::ports::util::AvatarUrlGenerator;
use crate::domain::follow::FollowCounts;
use crate::domain::user::{User, UserSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserDto {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    pub profile_pic_url: String,
}

impl UserDto {
    pub fn from_summary(summary: UserSummary, avatars: &dyn AvatarUrlGenerator) -> Self {
        let profile_pic_url = summary
            .profile_pic_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| avatars.default_for(summary.id));
        Self {
            id: summary.id.into(),
            name: summary.name,
            email: summary.email,
            profile_pic_url,
        }
    }

    pub fn from_user(user: &User, avatars: &dyn AvatarUrlGenerator) -> Self {
        Self::from_summary(user.summary(), avatars)
    }

    pub fn from_summaries(
        summaries: Vec<UserSummary>,
        avatars: &dyn AvatarUrlGenerator,
    ) -> Vec<Self> {
        summaries
            .into_iter()
            .map(|summary| Self::from_summary(summary, avatars))
            .collect()
    }
}

/// The caller's own account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    #[serde(flatten)]
    pub user: UserDto,
    #[serde(rename = "descricao")]
    pub bio: String,
    pub links: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time::option", default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl UserProfileDto {
    pub fn from_user(user: &User, avatars: &dyn AvatarUrlGenerator) -> Self {
        Self {
            user: UserDto::from_user(user, avatars),
            bio: user.bio.clone().unwrap_or_default(),
            links: user.links.clone().unwrap_or_default(),
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Another user's page as seen by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDetailDto {
    #[serde(flatten)]
    pub user: UserDto,
    #[serde(rename = "descricao")]
    pub bio: String,
    pub links: String,
    pub is_following: bool,
    pub followers_count: u64,
    pub following_count: u64,
    pub posts_count: u64,
}

impl UserDetailDto {
    pub fn from_parts(
        user: &User,
        is_following: bool,
        counts: FollowCounts,
        posts_count: u64,
        avatars: &dyn AvatarUrlGenerator,
    ) -> Self {
        Self {
            user: UserDto::from_user(user, avatars),
            bio: user.bio.clone().unwrap_or_default(),
            links: user.links.clone().unwrap_or_default(),
            is_following,
            followers_count: counts.followers,
            following_count: counts.following,
            posts_count,
        }
    }
}
