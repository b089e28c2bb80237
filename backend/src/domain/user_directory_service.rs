//! User listing, lookups, and per-user document summaries.
//!
//! The summary query loads the matching users and their documents in two
//! round trips and buckets the documents per status in memory, mirroring the
//! shape the admin table renders. Each document contributes exactly one to
//! its status bucket.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::document::DocumentStatus;
use crate::domain::ports::{DocumentRepository, UserRepository, UsersQuery};
use crate::domain::user::{Profile, User, UserDocumentSummary};
use crate::domain::{Error, map_repository_error};

/// Per-status tallies accumulated while bucketing a user's documents.
#[derive(Debug, Default, Clone, Copy)]
struct StatusTally {
    total: u64,
    pending: u64,
    in_progress: u64,
    concluded: u64,
}

impl StatusTally {
    fn record(&mut self, status: DocumentStatus) {
        self.total += 1;
        match status {
            DocumentStatus::Pending => self.pending += 1,
            DocumentStatus::InProgress => self.in_progress += 1,
            DocumentStatus::Concluded => self.concluded += 1,
        }
    }
}

/// User directory service backed by the user and document repositories.
#[derive(Clone)]
pub struct UserDirectoryService<U, D> {
    users: Arc<U>,
    documents: Arc<D>,
}

impl<U, D> UserDirectoryService<U, D> {
    /// Create a new service with the given repositories.
    pub fn new(users: Arc<U>, documents: Arc<D>) -> Self {
        Self { users, documents }
    }
}

#[async_trait]
impl<U, D> UsersQuery for UserDirectoryService<U, D>
where
    U: UserRepository,
    D: DocumentRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users
            .list_ordered_by_name()
            .await
            .map_err(|err| map_repository_error(err, "failed to fetch all users"))
    }

    async fn fetch_user(&self, id: Uuid) -> Result<Option<User>, Error> {
        self.users
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error(err, "failed to fetch user"))
    }

    async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, Error> {
        self.users
            .find_by_email(email)
            .await
            .map_err(|err| map_repository_error(err, "failed to fetch user"))
    }

    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<Profile>, Error> {
        self.users
            .find_profile_by_user_id(user_id)
            .await
            .map_err(|err| map_repository_error(err, "failed to fetch profile"))
    }

    async fn list_user_summaries(&self, term: &str) -> Result<Vec<UserDocumentSummary>, Error> {
        let users = self
            .users
            .list_filtered_with_profiles(term)
            .await
            .map_err(|err| map_repository_error(err, "failed to fetch users table"))?;

        let ids: Vec<Uuid> = users.iter().map(|(user, _)| user.id).collect();
        let documents = if ids.is_empty() {
            Vec::new()
        } else {
            self.documents
                .list_owned_by(&ids)
                .await
                .map_err(|err| map_repository_error(err, "failed to fetch users table"))?
        };

        let mut tallies: HashMap<Uuid, StatusTally> = HashMap::new();
        for document in documents {
            tallies.entry(document.user_id).or_default().record(document.status);
        }

        Ok(users
            .into_iter()
            .map(|(user, profile)| {
                let tally = tallies.get(&user.id).copied().unwrap_or_default();
                UserDocumentSummary {
                    id: user.id,
                    name: user.name,
                    email: user.email,
                    image_url: profile.map(|profile| profile.image_url),
                    total_documents: tally.total,
                    total_pending: tally.pending,
                    total_in_progress: tally.in_progress,
                    total_concluded: tally.concluded,
                }
            })
            .collect())
    }
}
