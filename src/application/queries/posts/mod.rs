mod list;
mod service;

pub use list::ListPostsQuery;
pub use service::PostQueryService;
