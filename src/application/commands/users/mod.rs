mod follow;
mod login;
mod password;
mod profile;
mod register;
mod service;

pub use login::{LoginResult, LoginUserCommand};
pub use profile::UpdateProfileCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
