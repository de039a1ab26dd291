// tests/support/mocks/mod.rs
pub mod post_repo;
pub mod security;
pub mod time;
pub mod user_repo;
pub mod util;

pub use post_repo::InMemoryPostRepo;
pub use security::{DummyPasswordHasher, DummyTokenManager, TEST_TOKEN, test_user_id};
pub use time::fixed_now;
pub use user_repo::InMemoryUserRepo;
pub use util::DummyClock;
