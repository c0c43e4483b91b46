mod follows;
mod profile;
mod search;
mod service;
mod view;

pub use search::SearchUsersQuery;
pub use service::UserQueryService;
