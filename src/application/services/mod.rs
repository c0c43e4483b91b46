// src/application/services/mod.rs
mod guard;

use std::sync::Arc;

pub use guard::{AuthorizationGuard, bearer_token};

use crate::{
    application::{
        commands::{
            candidacies::CandidacyCommandService, messages::MessageCommandService,
            posts::PostCommandService, users::UserCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::AvatarUrlGenerator,
        },
        queries::{
            candidacies::CandidacyQueryService, messages::MessageQueryService,
            posts::PostQueryService, users::UserQueryService,
        },
    },
    domain::{
        candidacy::CandidacyRepository, follow::FollowRepository, message::MessageRepository,
        post::PostRepository, user::UserRepository,
    },
};

/// Repository adapters handed to [`ApplicationServices::new`].
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub candidacies: Arc<dyn CandidacyRepository>,
    pub follows: Arc<dyn FollowRepository>,
    pub messages: Arc<dyn MessageRepository>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub candidacy_commands: Arc<CandidacyCommandService>,
    pub candidacy_queries: Arc<CandidacyQueryService>,
    pub message_commands: Arc<MessageCommandService>,
    pub message_queries: Arc<MessageQueryService>,
    guard: Arc<AuthorizationGuard>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        avatars: Arc<dyn AvatarUrlGenerator>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.follows),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&clock),
            Arc::clone(&avatars),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.follows),
            Arc::clone(&repos.posts),
            Arc::clone(&avatars),
        ));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&repos.posts),
            Arc::clone(&clock),
            Arc::clone(&avatars),
        ));
        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&repos.posts),
            Arc::clone(&repos.users),
            Arc::clone(&avatars),
        ));

        let candidacy_commands = Arc::new(CandidacyCommandService::new(
            Arc::clone(&repos.candidacies),
            Arc::clone(&repos.posts),
            Arc::clone(&clock),
        ));
        let candidacy_queries = Arc::new(CandidacyQueryService::new(
            Arc::clone(&repos.candidacies),
            Arc::clone(&avatars),
        ));

        let message_commands = Arc::new(MessageCommandService::new(
            Arc::clone(&repos.messages),
            Arc::clone(&repos.users),
            Arc::clone(&clock),
        ));
        let message_queries = Arc::new(MessageQueryService::new(
            Arc::clone(&repos.messages),
            Arc::clone(&repos.users),
            Arc::clone(&avatars),
        ));

        let guard = Arc::new(AuthorizationGuard::new(
            Arc::clone(&token_manager),
            Arc::clone(&repos.users),
            clock,
        ));

        Self {
            user_commands,
            user_queries,
            post_commands,
            post_queries,
            candidacy_commands,
            candidacy_queries,
            message_commands,
            message_queries,
            guard,
            token_manager,
        }
    }

    pub fn guard(&self) -> Arc<AuthorizationGuard> {
        Arc::clone(&self.guard)
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}
