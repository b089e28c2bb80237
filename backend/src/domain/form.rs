//! Document creation form: payload shape, validation, and submission state.
//!
//! Validation failures are data, not errors: they come back as per-field
//! message lists inside a [`ValidationFeedback`] envelope so the form can
//! re-render each field's error list. The [`FormState`] machine replaces the
//! original client-side form hook with explicit transitions driven by submit
//! and by the mutation's returned result.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::document::{DOCUMENT_CATEGORIES, Document, DocumentStatus};

/// File extensions the content field accepts.
///
/// Advisory only: the filter constrains the file name, not the bytes behind it.
pub const ALLOWED_CONTENT_EXTENSIONS: [&str; 3] = ["docx", "xlsx", "pdf"];

/// Message accompanying a rejected submission.
pub const REJECTED_MESSAGE: &str = "Missing or invalid fields; failed to create document.";

/// Raw creation-form payload.
///
/// Every field is optional; `validate` decides what is missing. An absent
/// status radio simply leaves that field out of the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct DocumentFormPayload {
    /// Document title.
    pub name: Option<String>,
    /// Category; must be a member of [`DOCUMENT_CATEGORIES`].
    pub category: Option<String>,
    /// Owning department id.
    pub department: Option<String>,
    /// One of the three status literals.
    pub status: Option<String>,
    /// Uploaded file name.
    pub content: Option<String>,
    /// Owning user id.
    pub user: Option<String>,
}

/// Per-field validation error lists keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    /// Append a message to the error list for `field`.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_owned()).or_default().push(message.into());
    }

    /// True when no field has errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Error messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

/// Envelope returned to the form when a submission is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationFeedback {
    pub message: String,
    pub errors: FieldErrors,
}

impl ValidationFeedback {
    /// Wrap field errors with the standard rejection message.
    pub fn new(errors: FieldErrors) -> Self {
        Self {
            message: REJECTED_MESSAGE.to_owned(),
            errors,
        }
    }
}

/// Payload that survived validation: ids parsed, status decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDocumentForm {
    pub title: String,
    pub category: String,
    pub status: DocumentStatus,
    pub content_ref: String,
    pub user_id: Uuid,
    pub department_id: Uuid,
}

fn has_allowed_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| {
            !stem.is_empty()
                && ALLOWED_CONTENT_EXTENSIONS
                    .iter()
                    .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// Validate a raw form payload.
///
/// Referential checks (does the user or department exist) belong to the
/// creation command; this function only inspects the payload itself.
pub fn validate(payload: &DocumentFormPayload) -> Result<ValidDocumentForm, FieldErrors> {
    let mut errors = FieldErrors::default();

    let title = match payload.name.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => Some(title.to_owned()),
        _ => {
            errors.push("name", "Please enter a title.");
            None
        }
    };

    let category = match payload.category.as_deref() {
        Some(category) if DOCUMENT_CATEGORIES.contains(&category) => Some(category.to_owned()),
        Some(_) => {
            errors.push("category", "Category is not in the list.");
            None
        }
        None => {
            errors.push("category", "Please choose a category.");
            None
        }
    };

    let department_id = match payload.department.as_deref() {
        Some(raw) => match Uuid::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push("department", "Department id must be a valid UUID.");
                None
            }
        },
        None => {
            errors.push("department", "Please choose a department.");
            None
        }
    };

    let status = match payload.status.as_deref() {
        Some(raw) => match DocumentStatus::from_str(raw) {
            Ok(status) => Some(status),
            Err(_) => {
                errors.push(
                    "status",
                    "Status must be one of pending, in_progress or concluded.",
                );
                None
            }
        },
        None => {
            errors.push("status", "Please select a document status.");
            None
        }
    };

    let content_ref = match payload.content.as_deref() {
        Some(file_name) if has_allowed_extension(file_name) => Some(file_name.to_owned()),
        Some(_) => {
            errors.push("content", "Only .docx, .xlsx and .pdf files are accepted.");
            None
        }
        None => {
            errors.push("content", "Please upload a document file.");
            None
        }
    };

    let user_id = match payload.user.as_deref() {
        Some(raw) => match Uuid::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                errors.push("user", "User id must be a valid UUID.");
                None
            }
        },
        None => {
            errors.push("user", "Please choose a user.");
            None
        }
    };

    match (title, category, department_id, status, content_ref, user_id) {
        (Some(title), Some(category), Some(department_id), Some(status), Some(content_ref), Some(user_id))
            if errors.is_empty() =>
        {
            Ok(ValidDocumentForm {
                title,
                category,
                status,
                content_ref,
                user_id,
                department_id,
            })
        }
        _ => Err(errors),
    }
}

/// Result of dispatching a validated-or-not submission to the create command.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionResult {
    /// The document row was inserted.
    Created(Document),
    /// Validation rejected the payload; nothing was written.
    Rejected(ValidationFeedback),
}

/// Explicit form-submission state machine.
///
/// Transitions: `Idle | Error | Success --submit--> Submitting`, and
/// `Submitting --resolve--> Success | Error`. Resolving in any other state is
/// a no-op, as is submitting while a submission is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Error(ValidationFeedback),
    Success {
        document_id: Uuid,
    },
}

impl FormState {
    /// Begin a submission.
    #[must_use]
    pub fn submit(self) -> Self {
        Self::Submitting
    }

    /// Apply the mutation result to an in-flight submission.
    #[must_use]
    pub fn resolve(self, outcome: &SubmissionResult) -> Self {
        match (self, outcome) {
            (Self::Submitting, SubmissionResult::Created(document)) => Self::Success {
                document_id: document.id,
            },
            (Self::Submitting, SubmissionResult::Rejected(feedback)) => {
                Self::Error(feedback.clone())
            }
            (state, _) => state,
        }
    }
}
