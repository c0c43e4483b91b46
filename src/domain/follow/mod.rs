pub mod entity;
pub mod repository;

pub use entity::{FollowCounts, FollowEdge};
pub use repository::FollowRepository;
