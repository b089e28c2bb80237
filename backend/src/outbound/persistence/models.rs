//! Diesel row models and their domain conversions.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::audit::AuditRecord;
use crate::domain::department::Department;
use crate::domain::document::{Document, DocumentStatus, NewDocument};
use crate::domain::user::{Profile, User};

use super::schema::{audit_records, departments, documents, profiles, users};

/// One row of the `documents` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DocumentRow {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub status: String,
    pub content_ref: String,
    pub user_id: Uuid,
    pub department_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DocumentRow {
    /// Parse the stored status, falling back to pending for values the CHECK
    /// constraint should have rejected.
    pub fn status(&self) -> DocumentStatus {
        self.status.parse().unwrap_or_else(|_| {
            tracing::warn!(
                document_id = %self.id,
                status = %self.status,
                "stored document status is not a known literal; treating as pending"
            );
            DocumentStatus::Pending
        })
    }
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        let status = row.status();
        Self {
            id: row.id,
            title: row.title,
            category: row.category,
            status,
            content_ref: row.content_ref,
            user_id: row.user_id,
            department_id: row.department_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Insertable form of a new document.
#[derive(Debug, Insertable)]
#[diesel(table_name = documents)]
pub struct NewDocumentRow<'a> {
    pub title: &'a str,
    pub category: &'a str,
    pub status: &'a str,
    pub content_ref: &'a str,
    pub user_id: Uuid,
    pub department_id: Uuid,
}

impl<'a> From<&'a NewDocument> for NewDocumentRow<'a> {
    fn from(document: &'a NewDocument) -> Self {
        Self {
            title: &document.title,
            category: &document.category,
            status: document.status.as_str(),
            content_ref: &document.content_ref,
            user_id: document.user_id,
            department_id: document.department_id,
        }
    }
}

/// One row of the `users` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// One row of the `profiles` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub image_url: String,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            image_url: row.image_url,
        }
    }
}

/// One row of the `departments` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DepartmentRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}

/// One row of the `audit_records` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = audit_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AuditRecordRow {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub entry: serde_json::Value,
}

impl From<AuditRecordRow> for AuditRecord {
    fn from(row: AuditRecordRow) -> Self {
        Self {
            id: row.id,
            recorded_at: row.recorded_at,
            entry: row.entry,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn document_row(status: &str) -> DocumentRow {
        DocumentRow {
            id: Uuid::nil(),
            title: "Annual plan".to_owned(),
            category: "Plans".to_owned(),
            status: status.to_owned(),
            content_ref: "plan.pdf".to_owned(),
            user_id: Uuid::nil(),
            department_id: Uuid::nil(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    #[case("pending", DocumentStatus::Pending)]
    #[case("in_progress", DocumentStatus::InProgress)]
    #[case("concluded", DocumentStatus::Concluded)]
    fn known_status_literals_are_parsed(#[case] raw: &str, #[case] expected: DocumentStatus) {
        assert_eq!(document_row(raw).status(), expected);
    }

    #[rstest]
    fn unknown_status_falls_back_to_pending() {
        assert_eq!(document_row("archived").status(), DocumentStatus::Pending);
    }

    #[rstest]
    fn insertable_row_borrows_domain_fields() {
        let document = NewDocument {
            title: "Annual plan".to_owned(),
            category: "Plans".to_owned(),
            status: DocumentStatus::InProgress,
            content_ref: "plan.pdf".to_owned(),
            user_id: Uuid::nil(),
            department_id: Uuid::nil(),
        };

        let row = NewDocumentRow::from(&document);
        assert_eq!(row.title, "Annual plan");
        assert_eq!(row.status, "in_progress");
    }
}
