use crate::application::ports::util::AvatarUrlGenerator;
use crate::domain::user::UserId;

/// Builds `{base}?u={id}` so each user gets a stable placeholder picture.
#[derive(Clone)]
pub struct TemplateAvatarUrlGenerator {
    base_url: String,
}

impl TemplateAvatarUrlGenerator {
    pub const DEFAULT_BASE_URL: &'static str = "https://i.pravatar.cc/150";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for TemplateAvatarUrlGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

impl AvatarUrlGenerator for TemplateAvatarUrlGenerator {
    fn default_for(&self, user_id: UserId) -> String {
        format!("{}?u={}", self.base_url, user_id)
    }
}
