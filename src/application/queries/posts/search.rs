use super::PostQueryService;
use crate::{
    application::{
        dto::{Page, PageParams, PostDto},
        error::ApplicationResult,
    },
    domain::post::PostListFilter,
};

pub struct SearchPostsQuery {
    pub query: String,
    pub params: PageParams,
}

impl PostQueryService {
    /// Case-insensitive substring match over title OR content.
    pub async fn search_posts(&self, query: SearchPostsQuery) -> ApplicationResult<Page<PostDto>> {
        self.fetch_page(PostListFilter::Search(query.query), query.params)
            .await
    }
}
