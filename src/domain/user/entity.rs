// src/domain/user/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::value_objects::{DisplayName, Email, PasswordHash, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: DisplayName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub profile_pic_url: Option<String>,
    pub bio: Option<String>,
    pub links: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.to_string(),
            email: self.email.to_string(),
            profile_pic_url: self.profile_pic_url.clone(),
        }
    }
}

/// The projection of a user embedded in lists (followers, search, authors).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub profile_pic_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: DisplayName,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        name: DisplayName,
        email: Email,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            name,
            email,
            password_hash,
            created_at,
        })
    }
}

/// Partial profile edit. `None` leaves the column untouched; `Some("")`
/// clears it.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub id: UserId,
    pub bio: Option<String>,
    pub links: Option<String>,
    pub profile_pic_url: Option<String>,
}

impl ProfileUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            bio: None,
            links: None,
            profile_pic_url: None,
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_links(mut self, links: impl Into<String>) -> Self {
        self.links = Some(links.into());
        self
    }

    pub fn with_profile_pic_url(mut self, url: impl Into<String>) -> Self {
        self.profile_pic_url = Some(url.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bio.is_none() && self.links.is_none() && self.profile_pic_url.is_none()
    }
}
