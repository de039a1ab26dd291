use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = EmailAddress::new(command.email)?;
        validate_password(&command.password)?;

        self.ensure_identity_available(&username, &email).await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let created_at = self.clock.now();
        let new_user = NewUser::new(username, email, password_hash, command.avatar, created_at);
        let user = self.user_repo.insert(new_user).await?;

        Ok(user.into())
    }

    /// Best-effort pre-check; the unique indexes on username and email
    /// are the final arbiter under concurrent registration.
    async fn ensure_identity_available(
        &self,
        username: &Username,
        email: &EmailAddress,
    ) -> ApplicationResult<()> {
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }
        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict("email already exists"));
        }
        Ok(())
    }
}
