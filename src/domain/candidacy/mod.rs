pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Candidacy, CandidacyWithOwner, NewCandidacy, ReceivedCandidacy};
pub use repository::CandidacyRepository;
pub use value_objects::{CandidacyId, CandidacyStatus, Decision};
