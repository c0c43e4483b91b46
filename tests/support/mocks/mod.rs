// tests/support/mocks/mod.rs
pub mod security;
pub mod time;

pub use security::{RecordingPasswordHasher, StrictPasswordHasher, TEST_SECRET};
pub use time::{SteppingClock, fixed_now};
