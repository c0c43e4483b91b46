// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_candidacy;
mod sqlite_follow;
mod sqlite_message;
mod sqlite_post;
mod sqlite_user;

pub use error::map_sqlx;
pub use sqlite_candidacy::SqliteCandidacyRepository;
pub use sqlite_follow::SqliteFollowRepository;
pub use sqlite_message::SqliteMessageRepository;
pub use sqlite_post::SqlitePostRepository;
pub use sqlite_user::SqliteUserRepository;
