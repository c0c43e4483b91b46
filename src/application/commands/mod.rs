pub mod candidacies;
pub mod messages;
pub mod posts;
pub mod users;
