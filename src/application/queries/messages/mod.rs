mod contacts;
mod conversation;
mod service;

pub use service::MessageQueryService;
