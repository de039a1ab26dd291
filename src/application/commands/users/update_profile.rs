use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, PasswordHash, UserUpdate, Username},
};

/// Partial update of the caller's own profile. Absent fields stay
/// untouched; there is no way to clear a field to empty.
pub struct UpdateProfileCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub password: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let now = self.clock.now();
        let mut update = UserUpdate::new(actor.id, now);

        if let Some(username) = command.username {
            update = update.with_username(Username::new(username)?);
        }
        if let Some(email) = command.email {
            update = update.with_email(EmailAddress::new(email)?);
        }
        if let Some(name) = command.name {
            update = update.with_name(name);
        }
        if let Some(bio) = command.bio {
            update = update.with_bio(bio);
        }
        if let Some(avatar) = command.avatar {
            update = update.with_avatar(avatar);
        }
        if let Some(password) = command.password {
            validate_password(&password)?;
            let hashed = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hashed)?);
        }

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let user = self.user_repo.update(update).await?;
        Ok(user.into())
    }
}
