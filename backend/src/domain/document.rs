//! Document aggregate, lifecycle status, and listing shapes.
//!
//! A document is a titled, categorised, status-tracked record owned by a user
//! and a department. Listing shapes carry the owner fields the dashboard
//! renders directly (id, name, avatar).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::department::Department;
use super::user::User;

/// Fixed page size for filtered document listings.
pub const PAGE_SIZE: u32 = 6;

/// Placeholder avatar used when a document owner has no profile image.
pub const DEFAULT_AVATAR: &str = "/";

/// Closed category list offered by the creation form.
///
/// Categories are stored as free text; this list constrains the creation
/// payload only, there is no referential constraint in the schema.
pub const DOCUMENT_CATEGORIES: [&str; 9] = [
    "Minutes",
    "Letters",
    "Decrees",
    "Leaflets",
    "Photographs",
    "Memoranda",
    "Official Letters",
    "Plans",
    "Reports",
];

/// Mutually exclusive document lifecycle stage.
///
/// Persisted as one of exactly three literal strings; see [`DocumentStatus::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Awaiting handling.
    Pending,
    /// Being worked on.
    InProgress,
    /// Handling finished.
    Concluded,
}

impl DocumentStatus {
    /// Database and wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Concluded => "concluded",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document status: {value}")]
pub struct ParseDocumentStatusError {
    pub value: String,
}

impl std::str::FromStr for DocumentStatus {
    type Err = ParseDocumentStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "concluded" => Ok(Self::Concluded),
            other => Err(ParseDocumentStatusError {
                value: other.to_owned(),
            }),
        }
    }
}

/// Full document record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub status: DocumentStatus,
    pub content_ref: String,
    pub user_id: Uuid,
    pub department_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to insert a new document.
///
/// The creation command guarantees `user_id` and `department_id` reference
/// existing rows before this struct reaches a repository.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
    pub title: String,
    pub category: String,
    pub status: DocumentStatus,
    pub content_ref: String,
    pub user_id: Uuid,
    pub department_id: Uuid,
}

/// Owner fields attached to a filtered document listing row.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOwner {
    pub user_id: Uuid,
    pub name: String,
    /// Profile image URL, or [`DEFAULT_AVATAR`] when the owner has no profile.
    pub avatar_url: String,
}

/// One row of the filtered, paginated document listing.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentListItem {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub category: String,
    pub status: DocumentStatus,
    #[serde(flatten)]
    pub owner: DocumentOwner,
}

/// A document joined with its owner (plus avatar) and department.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetail {
    pub document: Document,
    pub owner: User,
    pub owner_avatar: Option<String>,
    pub department: Department,
}

/// Condensed row for the latest-documents card.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LatestDocument {
    pub id: Uuid,
    pub title: String,
    pub user_id: Uuid,
}

/// Total page count for a filtered listing: `ceil(matches / PAGE_SIZE)`.
///
/// # Examples
/// ```
/// use docudesk::domain::document::page_count;
///
/// assert_eq!(page_count(0), 0);
/// assert_eq!(page_count(7), 2);
/// ```
pub fn page_count(matches: u64) -> u64 {
    matches.div_ceil(u64::from(PAGE_SIZE))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(6, 1)]
    #[case(7, 2)]
    #[case(12, 2)]
    #[case(13, 3)]
    fn page_count_is_ceiling_of_matches_over_page_size(
        #[case] matches: u64,
        #[case] expected: u64,
    ) {
        assert_eq!(page_count(matches), expected);
    }

    #[rstest]
    #[case("pending", DocumentStatus::Pending)]
    #[case("in_progress", DocumentStatus::InProgress)]
    #[case("concluded", DocumentStatus::Concluded)]
    fn status_round_trips_through_strings(#[case] raw: &str, #[case] status: DocumentStatus) {
        assert_eq!(DocumentStatus::from_str(raw), Ok(status));
        assert_eq!(status.as_str(), raw);
    }

    #[rstest]
    fn status_rejects_unknown_literals() {
        let err = DocumentStatus::from_str("archived").expect_err("unknown status");
        assert_eq!(err.value, "archived");
    }

    #[rstest]
    fn list_item_serialises_owner_fields_flat() {
        let item = DocumentListItem {
            id: Uuid::nil(),
            title: "Budget report".to_owned(),
            created_at: Utc::now(),
            category: "Reports".to_owned(),
            status: DocumentStatus::Pending,
            owner: DocumentOwner {
                user_id: Uuid::nil(),
                name: "Ada".to_owned(),
                avatar_url: DEFAULT_AVATAR.to_owned(),
            },
        };

        let value = serde_json::to_value(&item).expect("serialize list item");
        assert_eq!(value["name"], "Ada");
        assert_eq!(value["avatarUrl"], "/");
        assert_eq!(value["status"], "pending");
    }
}
