mod get;
mod profile;
mod service;

pub use get::GetUserQuery;
pub use service::UserQueryService;
