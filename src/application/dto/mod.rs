pub mod auth;
pub mod candidacies;
pub mod messages;
pub mod posts;
pub mod serde_time;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenClaims, TokenSubject};
pub use candidacies::{CandidacyDto, CandidacyPostDto, ReceivedCandidacyDto};
pub use messages::{ContactDto, MessageDto};
pub use posts::PostDto;
pub use users::{UserDetailDto, UserDto, UserProfileDto};
