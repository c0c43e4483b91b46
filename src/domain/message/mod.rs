pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Contact, Message, NewMessage};
pub use repository::MessageRepository;
pub use value_objects::{MessageContent, MessageId};
