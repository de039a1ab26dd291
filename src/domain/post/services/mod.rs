// src/domain/post/services/mod.rs
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{PostId, PostSlug, PostTitle};

/// Domain service responsible for producing unique slugs for posts.
///
/// Resolution is check-then-insert and therefore racy under concurrent
/// writers; the unique index on `posts.slug` is the final arbiter and the
/// command services retry resolution when an insert reports a conflict.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl PostSlugService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Derive a slug from `title` that no other post currently holds.
    ///
    /// `ignore_id` supports the update path: the post's own row never
    /// counts as a collision. A title with no sluggable characters falls
    /// back to a timestamped base rather than an empty slug.
    pub async fn resolve_unique(
        &self,
        title: &PostTitle,
        ignore_id: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            format!("post-{}", Utc::now().timestamp())
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = PostSlug::new(candidate.clone())?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if ignore_id.is_some_and(|id| id == existing.id) => {
                    return Ok(slug);
                }
                Some(_) => {
                    candidate = format!("{base_slug}-{counter}");
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}
