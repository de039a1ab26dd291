// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostContent, PostId, PostListFilter, PostReadRepository, PostSlug, PostTitle,
    PostUpdate, PostWriteRepository, TagName,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;
use uuid::Uuid;

const POST_COLUMNS: &str =
    "id, title, content, excerpt, cover_image, slug, author_id, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    content: String,
    excerpt: String,
    cover_image: Option<String>,
    slug: String,
    author_id: Uuid,
    published_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self, tags: Vec<TagName>) -> DomainResult<Post> {
        Ok(Post {
            id: PostId::from(self.id),
            title: PostTitle::new(self.title)?,
            content: PostContent::new(self.content)?,
            excerpt: self.excerpt,
            cover_image: self.cover_image,
            slug: PostSlug::new(self.slug)?,
            author_id: UserId::from(self.author_id),
            tags,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    post_id: Uuid,
    tag_name: String,
}

async fn load_tags<'e, E>(executor: E, post_ids: &[Uuid]) -> DomainResult<HashMap<Uuid, Vec<TagName>>>
where
    E: sqlx::PgExecutor<'e>,
{
    if post_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query_as::<_, TagRow>(
        "SELECT post_id, tag_name FROM post_tags WHERE post_id = ANY($1) ORDER BY tag_name",
    )
    .bind(post_ids)
    .fetch_all(executor)
    .await
    .map_err(map_sqlx)?;

    let mut by_post: HashMap<Uuid, Vec<TagName>> = HashMap::new();
    for row in rows {
        by_post
            .entry(row.post_id)
            .or_default()
            .push(TagName::new(row.tag_name)?);
    }
    Ok(by_post)
}

/// Tags are upserted by name; a name held by another post is reused, not
/// duplicated. Runs inside the caller's transaction.
async fn replace_tag_set(
    tx: &mut sqlx::Transaction<'_, Postgres>,
    post_id: Uuid,
    tags: &[TagName],
    clear_existing: bool,
) -> DomainResult<()> {
    if clear_existing {
        sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;
    }

    for tag in tags {
        sqlx::query("INSERT INTO tags (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(tag.as_str())
            .execute(&mut **tx)
            .await
            .map_err(map_sqlx)?;
        sqlx::query(
            "INSERT INTO post_tags (post_id, tag_name) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(post_id)
        .bind(tag.as_str())
        .execute(&mut **tx)
        .await
        .map_err(map_sqlx)?;
    }

    Ok(())
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            id,
            title,
            content,
            excerpt,
            cover_image,
            slug,
            author_id,
            tags,
            published_at,
            created_at,
            updated_at,
        } = post;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (id, title, content, excerpt, cover_image, slug, author_id, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id, title, content, excerpt, cover_image, slug, author_id, published_at, created_at, updated_at",
        )
        .bind(Uuid::from(id))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(&excerpt)
        .bind(&cover_image)
        .bind(slug.as_str())
        .bind(Uuid::from(author_id))
        .bind(published_at)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_tag_set(&mut tx, row.id, &tags, false).await?;

        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(tags)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            content,
            excerpt,
            cover_image,
            slug,
            tags,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(String::from(content));
        }
        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt);
        }
        if let Some(cover_image) = cover_image {
            builder.push(", cover_image = ");
            builder.push_bind(cover_image);
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(String::from(slug));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(Uuid::from(id));
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(tags) = &tags {
            replace_tag_set(&mut tx, row.id, tags, true).await?;
        }

        let tag_set = match tags {
            Some(tags) => tags,
            None => load_tags(&mut *tx, &[row.id])
                .await?
                .remove(&row.id)
                .unwrap_or_default(),
        };

        tx.commit().await.map_err(map_sqlx)?;

        row.into_post(tag_set)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        // Join rows cascade with the post; tag rows are left alone.
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(Uuid::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

impl PostgresPostReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &PostListFilter) {
        match filter {
            PostListFilter::All => {}
            PostListFilter::Author(author_id) => {
                builder.push(" WHERE author_id = ");
                builder.push_bind(Uuid::from(*author_id));
            }
            PostListFilter::Search(query) => {
                let pattern = format!("%{query}%");
                builder.push(" WHERE (title ILIKE ");
                builder.push_bind(pattern.clone());
                builder.push(" OR content ILIKE ");
                builder.push_bind(pattern);
                builder.push(")");
            }
        }
    }

    async fn fetch_one_post(&self, row: Option<PostRow>) -> DomainResult<Option<Post>> {
        let Some(row) = row else {
            return Ok(None);
        };
        let tags = load_tags(&self.pool, &[row.id])
            .await?
            .remove(&row.id)
            .unwrap_or_default();
        row.into_post(tags).map(Some)
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content, excerpt, cover_image, slug, author_id, published_at, created_at, updated_at
             FROM posts WHERE id = $1",
        )
        .bind(Uuid::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.fetch_one_post(row).await
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, title, content, excerpt, cover_image, slug, author_id, published_at, created_at, updated_at
             FROM posts WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        self.fetch_one_post(row).await
    }

    async fn list_page(
        &self,
        filter: PostListFilter,
        offset: u64,
        limit: u64,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM posts");
        Self::apply_filter(&mut count_builder, &filter);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, title, content, excerpt, cover_image, slug, author_id, published_at, created_at, updated_at FROM posts",
        );
        Self::apply_filter(&mut builder, &filter);
        builder.push(" ORDER BY published_at DESC OFFSET ");
        builder.push_bind(offset as i64);
        builder.push(" LIMIT ");
        builder.push_bind(limit as i64);

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut tags_by_post = load_tags(&self.pool, &ids).await?;

        let posts = rows
            .into_iter()
            .map(|row| {
                let tags = tags_by_post.remove(&row.id).unwrap_or_default();
                row.into_post(tags)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((posts, total as u64))
    }
}
