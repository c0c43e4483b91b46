pub mod candidacy;
pub mod errors;
pub mod follow;
pub mod message;
pub mod post;
pub mod user;
