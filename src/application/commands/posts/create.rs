// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::post::{AudioUrl, NewPost, PostBody, PostTitle},
};
use tracing::info;

pub struct CreatePostCommand {
    pub title: String,
    pub body: String,
    pub audio_url: Option<String>,
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let body = PostBody::new(command.body)?;

        let new_post = NewPost {
            owner_id: actor.id,
            title,
            body,
            audio_url: AudioUrl::parse(command.audio_url),
            created_at: self.clock.now(),
        };

        let created = self.post_repo.insert(new_post).await?;
        info!(post_id = %created.post.id, owner_id = %actor.id, "post created");
        Ok(PostDto::from_post(created, self.avatars.as_ref()))
    }
}
