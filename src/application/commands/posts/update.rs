// src/application/commands/posts/update.rs
use super::service::{MAX_SLUG_ATTEMPTS, PostCommandService};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        post::{Post, PostContent, PostId, PostTitle, PostUpdate, TagName},
    },
};

pub struct UpdatePostCommand {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PostCommandService {
    /// Owner-only. A post owned by someone else reports the same
    /// not-found signal as a post that does not exist.
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let id = PostId::parse(&command.id)?;
        let post = self.find_owned_post(actor, id).await?;

        let title_opt = command.title.map(PostTitle::new).transpose()?;
        let content_opt = command.content.map(PostContent::new).transpose()?;
        let tags_opt = command
            .tags
            .map(|tags| tags.into_iter().map(TagName::new).collect::<Result<Vec<_>, _>>())
            .transpose()?;

        let now = self.clock.now();
        let mut attempt = 0u32;

        loop {
            let mut update = PostUpdate::new(post.id, now);

            if let Some(title) = &title_opt {
                let slug = self
                    .slug_service
                    .resolve_unique(title, Some(post.id))
                    .await?;
                update = update.with_title(title.clone()).with_slug(slug);
            }
            if let Some(content) = &content_opt {
                update = update.with_content(content.clone());
            }
            if let Some(excerpt) = &command.excerpt {
                update = update.with_excerpt(excerpt.clone());
            }
            if let Some(cover_image) = &command.cover_image {
                update = update.with_cover_image(cover_image.clone());
            }
            if let Some(tags) = &tags_opt {
                update = update.with_tags(tags.clone());
            }

            match self.write_repo.update(update).await {
                Ok(updated) => return Ok(updated.into()),
                Err(DomainError::Conflict(reason))
                    if title_opt.is_some() && attempt < MAX_SLUG_ATTEMPTS =>
                {
                    attempt += 1;
                    tracing::debug!(%reason, attempt, "slug conflict on update, re-resolving");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    pub(super) async fn find_owned_post(
        &self,
        actor: &AuthenticatedUser,
        id: PostId,
    ) -> ApplicationResult<Post> {
        let post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        // Ownership failure is deliberately indistinguishable from absence.
        if !post.is_authored_by(actor.id) {
            return Err(ApplicationError::not_found("post not found"));
        }

        Ok(post)
    }
}
