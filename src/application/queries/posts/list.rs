use super::PostQueryService;
use crate::{
    application::{
        dto::{Page, PageParams, PostDto},
        error::ApplicationResult,
    },
    domain::{post::PostListFilter, user::UserId},
};

pub struct ListPostsQuery {
    pub params: PageParams,
}

pub struct ListPostsByAuthorQuery {
    pub author_id: String,
    pub params: PageParams,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<Page<PostDto>> {
        self.fetch_page(PostListFilter::All, query.params).await
    }

    /// Listing an unknown author yields an empty page, not an error; the
    /// total and page count stay consistent with an empty result set.
    pub async fn list_posts_by_author(
        &self,
        query: ListPostsByAuthorQuery,
    ) -> ApplicationResult<Page<PostDto>> {
        let author_id = UserId::parse(&query.author_id)?;
        self.fetch_page(PostListFilter::Author(author_id), query.params)
            .await
    }

    pub(super) async fn fetch_page(
        &self,
        filter: PostListFilter,
        params: PageParams,
    ) -> ApplicationResult<Page<PostDto>> {
        let (posts, total) = self
            .read_repo
            .list_page(filter, params.offset(), u64::from(params.limit()))
            .await?;

        let items = posts.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, params))
    }
}
