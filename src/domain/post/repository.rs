use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{PostId, PostSlug};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Which subset of posts a listing targets. Every variant orders by
/// `published_at` descending; ties fall back to storage-native order.
#[derive(Debug, Clone)]
pub enum PostListFilter {
    All,
    Author(UserId),
    Search(String),
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;

    /// Fetch one window of the listing plus the unwindowed total count.
    async fn list_page(
        &self,
        filter: PostListFilter,
        offset: u64,
        limit: u64,
    ) -> DomainResult<(Vec<Post>, u64)>;
}
