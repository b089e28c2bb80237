//! Driving port for user read queries.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Error;
use crate::domain::user::{Profile, User, UserDocumentSummary};

/// Read-side user operations exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// All users ordered by name; populates the creation form's selector.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// One user by id; `None` when absent.
    async fn fetch_user(&self, id: Uuid) -> Result<Option<User>, Error>;

    /// One user by email; `None` when absent.
    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, Error>;

    /// A user's profile; `None` when the user has no profile.
    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<Profile>, Error>;

    /// Filtered users with per-status document counts.
    async fn list_user_summaries(&self, term: &str) -> Result<Vec<UserDocumentSummary>, Error>;
}
