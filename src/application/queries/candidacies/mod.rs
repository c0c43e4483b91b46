mod received;
mod service;

pub use received::ReceivedCandidaciesQuery;
pub use service::CandidacyQueryService;
