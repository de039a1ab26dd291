mod get;
mod list;
mod search;
mod service;

pub use get::GetPostQuery;
pub use list::{ListPostsByAuthorQuery, ListPostsQuery};
pub use search::SearchPostsQuery;
pub use service::PostQueryService;
