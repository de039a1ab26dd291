// tests/support/mocks/post_repo.rs
use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use commonminds_core::domain::errors::{DomainError, DomainResult};
use commonminds_core::domain::post::{
    NewPost, Post, PostId, PostListFilter, PostReadRepository, PostSlug, PostUpdate,
    PostWriteRepository,
};

/// In-memory post store that mirrors the Postgres behaviour the services
/// depend on: the slug column is unique, tag rows are shared across posts
/// and outlive deletions, and listings order by `published_at` descending.
#[derive(Default)]
pub struct InMemoryPostRepo {
    posts: Mutex<HashMap<Uuid, Post>>,
    tag_rows: Mutex<BTreeSet<String>>,
}

impl InMemoryPostRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, post: Post) {
        let mut tags = self.tag_rows.lock().unwrap();
        for tag in &post.tags {
            tags.insert(tag.as_str().to_owned());
        }
        self.posts.lock().unwrap().insert(post.id.as_uuid(), post);
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    /// Snapshot of the tag table, independent of any post.
    pub fn tag_rows(&self) -> Vec<String> {
        self.tag_rows.lock().unwrap().iter().cloned().collect()
    }

    fn slug_taken(posts: &HashMap<Uuid, Post>, slug: &PostSlug, ignore: Option<PostId>) -> bool {
        posts
            .values()
            .any(|p| &p.slug == slug && ignore != Some(p.id))
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostRepo {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        if Self::slug_taken(&posts, &post.slug, None) {
            return Err(DomainError::Conflict("posts_slug_key".into()));
        }

        let mut tags = self.tag_rows.lock().unwrap();
        for tag in &post.tags {
            tags.insert(tag.as_str().to_owned());
        }

        let stored = Post {
            id: post.id,
            title: post.title,
            content: post.content,
            excerpt: post.excerpt,
            cover_image: post.cover_image,
            slug: post.slug,
            author_id: post.author_id,
            tags: post.tags,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        posts.insert(stored.id.as_uuid(), stored.clone());
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        if let Some(slug) = &update.slug {
            if Self::slug_taken(&posts, slug, Some(update.id)) {
                return Err(DomainError::Conflict("posts_slug_key".into()));
            }
        }

        let post = posts
            .get_mut(&update.id.as_uuid())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(excerpt) = update.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(cover_image) = update.cover_image {
            post.cover_image = Some(cover_image);
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(new_tags) = update.tags {
            let mut tags = self.tag_rows.lock().unwrap();
            for tag in &new_tags {
                tags.insert(tag.as_str().to_owned());
            }
            post.tags = new_tags;
        }
        post.updated_at = update.updated_at;

        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        // only join rows go away with the post; tag rows stay behind
        posts
            .remove(&id.as_uuid())
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.get(&id.as_uuid()).cloned())
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let posts = self.posts.lock().unwrap();
        Ok(posts.values().find(|p| &p.slug == slug).cloned())
    }

    async fn list_page(
        &self,
        filter: PostListFilter,
        offset: u64,
        limit: u64,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let posts = self.posts.lock().unwrap();
        let mut matched: Vec<Post> = posts
            .values()
            .filter(|p| match &filter {
                PostListFilter::All => true,
                PostListFilter::Author(author_id) => p.author_id == *author_id,
                PostListFilter::Search(query) => {
                    let q = query.to_lowercase();
                    p.title.as_str().to_lowercase().contains(&q)
                        || p.content.as_str().to_lowercase().contains(&q)
                }
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        let total = matched.len() as u64;
        let window = matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((window, total))
    }
}
