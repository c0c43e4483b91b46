// src/application/commands/posts/mod.rs
mod create;
mod service;

pub use create::CreatePostCommand;
pub use service::PostCommandService;
