// src/application/commands/posts/create.rs
use super::service::{MAX_SLUG_ATTEMPTS, PostCommandService};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
    },
    domain::{
        errors::DomainError,
        post::{NewPost, PostContent, PostId, PostTitle, TagName},
    },
};

const EXCERPT_CHARS: usize = 150;

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
}

/// First 150 characters of the content plus an ellipsis marker. The cut
/// is by raw character count, not word boundary.
pub(super) fn derive_excerpt(content: &str) -> String {
    let truncated: String = content.chars().take(EXCERPT_CHARS).collect();
    format!("{truncated}...")
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let excerpt = command
            .excerpt
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| derive_excerpt(content.as_str()));
        let tags = command
            .tags
            .into_iter()
            .map(TagName::new)
            .collect::<Result<Vec<_>, _>>()?;

        let now = self.clock.now();
        let mut attempt = 0u32;

        loop {
            let slug = self.slug_service.resolve_unique(&title, None).await?;

            let new_post = NewPost {
                id: PostId::generate(),
                title: title.clone(),
                content: content.clone(),
                excerpt: excerpt.clone(),
                cover_image: command.cover_image.clone(),
                slug,
                author_id: actor.id,
                tags: tags.clone(),
                published_at: now,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_post).await {
                Ok(created) => return Ok(created.into()),
                Err(DomainError::Conflict(reason)) if attempt < MAX_SLUG_ATTEMPTS => {
                    attempt += 1;
                    tracing::debug!(%reason, attempt, "slug conflict on insert, re-resolving");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
