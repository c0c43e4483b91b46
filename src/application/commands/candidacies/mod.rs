// src/application/commands/candidacies/mod.rs
mod apply;
mod resolve;
mod service;

pub use resolve::ResolveCandidacyCommand;
pub use service::CandidacyCommandService;
