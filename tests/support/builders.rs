// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use commonminds_core::application::dto::AuthenticatedUser;
use commonminds_core::domain::post::{Post, PostContent, PostId, PostSlug, PostTitle, TagName};
use commonminds_core::domain::user::{
    EmailAddress, PasswordHash, User, UserId, Username,
};

use super::mocks::time::fixed_now;

pub struct PostBuilder {
    id: PostId,
    title: String,
    slug: String,
    content: String,
    author_id: UserId,
    tags: Vec<String>,
    published_at: DateTime<Utc>,
}

impl PostBuilder {
    pub fn new() -> Self {
        Self {
            id: PostId::generate(),
            title: "Test Post".into(),
            slug: "test-post".into(),
            content: "Test content".into(),
            author_id: UserId::generate(),
            tags: vec![],
            published_at: fixed_now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author_id: UserId) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| (*t).to_owned()).collect();
        self
    }

    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = at;
        self
    }

    pub fn build(self) -> Post {
        Post {
            id: self.id,
            title: PostTitle::new(self.title).unwrap(),
            content: PostContent::new(self.content.clone()).unwrap(),
            excerpt: format!("{}...", &self.content),
            cover_image: None,
            slug: PostSlug::new(self.slug).unwrap(),
            author_id: self.author_id,
            tags: self
                .tags
                .into_iter()
                .map(|t| TagName::new(t).unwrap())
                .collect(),
            published_at: self.published_at,
            created_at: self.published_at,
            updated_at: self.published_at,
        }
    }
}

pub fn sample_user(username: &str, email: &str) -> User {
    let now = fixed_now();
    User {
        id: UserId::generate(),
        username: Username::new(username).unwrap(),
        email: EmailAddress::new(email).unwrap(),
        password_hash: PasswordHash::new("hash::password123").unwrap(),
        name: None,
        bio: None,
        avatar: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn authenticated(id: UserId, username: &str) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id,
        username: username.into(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}
