// src/application/commands/messages/mod.rs
mod send;
mod service;

pub use send::SendMessageCommand;
pub use service::MessageCommandService;
