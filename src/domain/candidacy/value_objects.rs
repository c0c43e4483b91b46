use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidacyId(pub i64);

impl CandidacyId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "candidacy id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CandidacyId> for i64 {
    fn from(value: CandidacyId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CandidacyStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl CandidacyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidacyStatus::Pending => "pending",
            CandidacyStatus::Accepted => "accepted",
            CandidacyStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for CandidacyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidacyStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" | "pendente" => Ok(CandidacyStatus::Pending),
            "accepted" | "aceito" => Ok(CandidacyStatus::Accepted),
            "rejected" | "rejeitado" => Ok(CandidacyStatus::Rejected),
            other => Err(DomainError::Validation(format!(
                "unknown candidacy status '{other}'"
            ))),
        }
    }
}

/// What a post owner does with a candidacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    pub fn resulting_status(self) -> CandidacyStatus {
        match self {
            Decision::Accept => CandidacyStatus::Accepted,
            Decision::Reject => CandidacyStatus::Rejected,
        }
    }
}

impl FromStr for Decision {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aceitar" | "accept" => Ok(Decision::Accept),
            "rejeitar" | "reject" => Ok(Decision::Reject),
            _ => Err(DomainError::Validation(
                "invalid action, use 'aceitar' or 'rejeitar'".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_parses_route_actions() {
        assert_eq!("aceitar".parse::<Decision>().unwrap(), Decision::Accept);
        assert_eq!("rejeitar".parse::<Decision>().unwrap(), Decision::Reject);
        assert!("approve".parse::<Decision>().is_err());
    }

    #[test]
    fn status_round_trips_through_storage_text() {
        for status in [
            CandidacyStatus::Pending,
            CandidacyStatus::Accepted,
            CandidacyStatus::Rejected,
        ] {
            assert_eq!(status.as_str().parse::<CandidacyStatus>().unwrap(), status);
        }
    }
}
