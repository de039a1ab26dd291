use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, User, UserId, Username},
};

/// Lookup by exactly one identifying filter. Supplying none is a caller
/// contract violation, reported as a validation error rather than a
/// silent empty result.
#[derive(Debug, Default)]
pub struct GetUserQuery {
    pub id: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}

impl UserQueryService {
    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let user = self
            .lookup(query)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        Ok(user.into())
    }

    async fn lookup(&self, query: GetUserQuery) -> ApplicationResult<Option<User>> {
        if let Some(id) = query.id {
            let id = UserId::parse(&id)?;
            return Ok(self.user_repo.find_by_id(id).await?);
        }
        if let Some(email) = query.email {
            let email = EmailAddress::new(email)?;
            return Ok(self.user_repo.find_by_email(&email).await?);
        }
        if let Some(username) = query.username {
            let username = Username::new(username)?;
            return Ok(self.user_repo.find_by_username(&username).await?);
        }
        Err(ApplicationError::validation(
            "at least one identifier must be provided",
        ))
    }
}
