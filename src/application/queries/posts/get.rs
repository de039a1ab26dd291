use super::PostQueryService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostId, PostSlug},
};

/// A path segment that may carry either an opaque id or a slug.
pub struct GetPostQuery {
    pub id_or_slug: String,
}

impl PostQueryService {
    /// Dual-key lookup: try the segment as an id first, fall back to
    /// slug. Ids are uuids, so the two key spaces cannot overlap.
    pub async fn get_post(&self, query: GetPostQuery) -> ApplicationResult<PostDto> {
        if let Ok(id) = PostId::parse(&query.id_or_slug) {
            if let Some(post) = self.read_repo.find_by_id(id).await? {
                return Ok(post.into());
            }
        }

        let slug = PostSlug::new(query.id_or_slug)?;
        self.read_repo
            .find_by_slug(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }
}
