//! Diesel-backed document repository.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::document::{
    DEFAULT_AVATAR, Document, DocumentDetail, DocumentListItem, DocumentOwner, DocumentStatus,
    LatestDocument, NewDocument,
};
use crate::domain::ports::{DocumentRepository, RepositoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::like_pattern;
use super::models::{DepartmentRow, DocumentRow, NewDocumentRow, ProfileRow, UserRow};
use super::pool::DbPool;
use super::schema::{departments, documents, profiles, users};

/// Document repository backed by PostgreSQL.
#[derive(Clone)]
pub struct DieselDocumentRepository {
    pool: DbPool,
}

impl DieselDocumentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_list_item(
    (document, owner, profile): (DocumentRow, UserRow, Option<ProfileRow>),
) -> DocumentListItem {
    let status = document.status();
    DocumentListItem {
        id: document.id,
        title: document.title,
        created_at: document.created_at,
        category: document.category,
        status,
        owner: DocumentOwner {
            user_id: owner.id,
            name: owner.name,
            avatar_url: profile.map_or_else(|| DEFAULT_AVATAR.to_owned(), |p| p.image_url),
        },
    }
}

#[async_trait]
impl DocumentRepository for DieselDocumentRepository {
    async fn list_filtered(
        &self,
        term: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DocumentListItem>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let pattern = like_pattern(term);

        let rows: Vec<(DocumentRow, UserRow, Option<ProfileRow>)> = documents::table
            .inner_join(users::table.left_join(profiles::table))
            .filter(
                documents::title
                    .like(pattern.clone())
                    .or(documents::status.like(pattern.clone()))
                    .or(documents::category.like(pattern.clone()))
                    .or(users::name.like(pattern.clone()))
                    .or(users::email.like(pattern)),
            )
            .order(documents::created_at.desc())
            .limit(limit)
            .offset(offset)
            .select((
                DocumentRow::as_select(),
                UserRow::as_select(),
                Option::<ProfileRow>::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(to_list_item).collect())
    }

    async fn count_filtered(&self, term: &str) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let pattern = like_pattern(term);

        let count: i64 = documents::table
            .inner_join(users::table)
            .filter(
                documents::title
                    .like(pattern.clone())
                    .or(documents::status.like(pattern.clone()))
                    .or(documents::category.like(pattern.clone()))
                    .or(users::name.like(pattern.clone()))
                    .or(users::email.like(pattern)),
            )
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn list_latest(&self, limit: i64) -> Result<Vec<LatestDocument>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(Uuid, String, Uuid)> = documents::table
            .order(documents::updated_at.desc())
            .limit(limit)
            .select((documents::id, documents::title, documents::user_id))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(id, title, user_id)| LatestDocument { id, title, user_id })
            .collect())
    }

    async fn list_all_by_title(&self) -> Result<Vec<Document>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DocumentRow> = documents::table
            .order(documents::title.asc())
            .select(DocumentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<DocumentDetail>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<(DocumentRow, UserRow, Option<ProfileRow>, DepartmentRow)> =
            documents::table
                .inner_join(users::table.left_join(profiles::table))
                .inner_join(departments::table)
                .filter(documents::id.eq(id))
                .select((
                    DocumentRow::as_select(),
                    UserRow::as_select(),
                    Option::<ProfileRow>::as_select(),
                    DepartmentRow::as_select(),
                ))
                .first(&mut conn)
                .await
                .optional()
                .map_err(map_diesel_error)?;

        Ok(row.map(|(document, owner, profile, department)| DocumentDetail {
            document: document.into(),
            owner: owner.into(),
            owner_avatar: profile.map(|p| p.image_url),
            department: department.into(),
        }))
    }

    async fn list_owned_by(&self, user_ids: &[Uuid]) -> Result<Vec<Document>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DocumentRow> = documents::table
            .filter(documents::user_id.eq_any(user_ids.to_vec()))
            .select(DocumentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn count_all(&self) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = documents::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn count_with_status(&self, status: DocumentStatus) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = documents::table
            .filter(documents::status.eq(status.as_str()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn insert(&self, document: NewDocument) -> Result<Document, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: DocumentRow = diesel::insert_into(documents::table)
            .values(NewDocumentRow::from(&document))
            .returning(DocumentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::Utc;
    use rstest::rstest;

    fn joined_row(avatar: Option<&str>) -> (DocumentRow, UserRow, Option<ProfileRow>) {
        let now = Utc::now();
        (
            DocumentRow {
                id: Uuid::nil(),
                title: "Budget report".to_owned(),
                category: "Reports".to_owned(),
                status: "concluded".to_owned(),
                content_ref: "budget.xlsx".to_owned(),
                user_id: Uuid::nil(),
                department_id: Uuid::nil(),
                created_at: now,
                updated_at: now,
            },
            UserRow {
                id: Uuid::nil(),
                name: "Ada".to_owned(),
                email: "ada@example.com".to_owned(),
                created_at: now,
                updated_at: now,
            },
            avatar.map(|url| ProfileRow {
                id: Uuid::nil(),
                user_id: Uuid::nil(),
                image_url: url.to_owned(),
            }),
        )
    }

    #[rstest]
    fn list_item_uses_profile_avatar_when_present() {
        let item = to_list_item(joined_row(Some("/avatars/ada.png")));
        assert_eq!(item.owner.avatar_url, "/avatars/ada.png");
        assert_eq!(item.status, DocumentStatus::Concluded);
    }

    #[rstest]
    fn list_item_falls_back_to_placeholder_avatar() {
        let item = to_list_item(joined_row(None));
        assert_eq!(item.owner.avatar_url, DEFAULT_AVATAR);
    }
}
