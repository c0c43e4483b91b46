use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

// SQLite names the offending columns rather than the constraint.
const UNIQUE_USER_EMAIL: &str = "users.email";
const UNIQUE_FOLLOW_EDGE: &str = "follows.follower_id, follows.followee_id";
const UNIQUE_CANDIDACY: &str = "candidacies.applicant_id, candidacies.post_id";
const CHECK_NO_SELF_FOLLOW: &str = "follows_no_self_follow";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            match db_err.kind() {
                ErrorKind::UniqueViolation => DomainError::Conflict(unique_target(message).into()),
                ErrorKind::ForeignKeyViolation => {
                    DomainError::NotFound("referenced record not found".into())
                }
                ErrorKind::CheckViolation if message.contains(CHECK_NO_SELF_FOLLOW) => {
                    DomainError::Validation("you cannot follow yourself".into())
                }
                ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                    DomainError::Validation(format!("constraint violated: {message}"))
                }
                _ => DomainError::Persistence(message.to_string()),
            }
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn unique_target(message: &str) -> &'static str {
    if message.contains(UNIQUE_USER_EMAIL) {
        "email already registered"
    } else if message.contains(UNIQUE_FOLLOW_EDGE) {
        "already following"
    } else if message.contains(UNIQUE_CANDIDACY) {
        "already applied to this post"
    } else {
        "unique constraint violated"
    }
}
