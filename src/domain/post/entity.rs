// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PostContent, PostId, PostSlug, PostTitle, TagName};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub slug: PostSlug,
    pub author_id: UserId,
    pub tags: Vec<TagName>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub id: PostId,
    pub title: PostTitle,
    pub content: PostContent,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub slug: PostSlug,
    pub author_id: UserId,
    pub tags: Vec<TagName>,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a stored post. `None` fields are untouched; a
/// `Some(tags)` replaces the whole tag set rather than merging into it.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub content: Option<PostContent>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub slug: Option<PostSlug>,
    pub tags: Option<Vec<TagName>>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            excerpt: None,
            cover_image: None,
            slug: None,
            tags: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_excerpt(mut self, excerpt: String) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_cover_image(mut self, cover_image: String) -> Self {
        self.cover_image = Some(cover_image);
        self
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_tags(mut self, tags: Vec<TagName>) -> Self {
        self.tags = Some(tags);
        self
    }
}
