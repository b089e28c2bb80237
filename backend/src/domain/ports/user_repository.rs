//! Port for user and profile persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::user::{Profile, User};

use super::RepositoryError;

/// Port for user storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by name ascending.
    async fn list_ordered_by_name(&self) -> Result<Vec<User>, RepositoryError>;

    /// One user by id; `None` when the id does not exist.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// One user by email; `None` when no user has that address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;

    /// The profile owned by a user; `None` when the user has no profile.
    async fn find_profile_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Profile>, RepositoryError>;

    /// Users whose name or email contains the term, each with their profile.
    async fn list_filtered_with_profiles(
        &self,
        term: &str,
    ) -> Result<Vec<(User, Option<Profile>)>, RepositoryError>;

    /// Total number of users.
    async fn count_all(&self) -> Result<u64, RepositoryError>;
}
