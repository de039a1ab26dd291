pub mod auth;
pub mod pagination;
pub mod posts;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use pagination::{Page, PageParams};
pub use posts::PostDto;
pub use users::UserDto;
