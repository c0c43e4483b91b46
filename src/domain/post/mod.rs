pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewPost, Post, PostWithAuthor};
pub use repository::PostRepository;
pub use value_objects::{AudioUrl, PostBody, PostId, PostTitle};
