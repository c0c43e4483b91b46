// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod candidacies;
pub mod messages;
pub mod posts;
pub mod users;
