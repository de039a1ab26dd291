// tests/support/mocks/user_repo.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use commonminds_core::domain::errors::{DomainError, DomainResult};
use commonminds_core::domain::user::{
    EmailAddress, NewUser, User, UserId, UserRepository, UserUpdate, Username,
};

/// In-memory user store with the same uniqueness behaviour as the
/// Postgres schema: duplicate usernames and emails report a conflict.
#[derive(Default)]
pub struct InMemoryUserRepo {
    inner: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, user: User) {
        self.inner
            .lock()
            .unwrap()
            .insert(user.id.as_uuid(), user);
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        for existing in map.values() {
            if existing.username == new_user.username {
                return Err(DomainError::Conflict("users_username_key".into()));
            }
            if existing.email == new_user.email {
                return Err(DomainError::Conflict("users_email_key".into()));
            }
        }

        let user = User {
            id: new_user.id,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            name: None,
            bio: None,
            avatar: new_user.avatar,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
            updated_at: new_user.updated_at,
        };
        map.insert(user.id.as_uuid(), user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        let user = map
            .get_mut(&update.id.as_uuid())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(name) = update.name {
            user.name = Some(name);
        }
        if let Some(bio) = update.bio {
            user.bio = Some(bio);
        }
        if let Some(avatar) = update.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        user.updated_at = update.updated_at;

        Ok(user.clone())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map.get(&id.as_uuid()).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map.values().find(|u| &u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map.values().find(|u| &u.email == email).cloned())
    }
}
