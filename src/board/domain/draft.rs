//! Validated task content and the raw form payloads that produce it.

use super::{TaskDomainError, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated, non-empty task title.
///
/// # Examples
///
///     use laneboard::board::domain::TaskTitle;
///
///     let title = TaskTitle::new("  Buy milk ").expect("valid");
///     assert_eq!(title.as_str(), "Buy milk");
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated title and description, ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: TaskTitle,
    description: String,
}

impl TaskDraft {
    /// Creates a draft from raw form values.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is blank.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        Ok(Self {
            title: TaskTitle::new(title)?,
            description: description.into(),
        })
    }

    /// Returns the validated title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn into_parts(self) -> (TaskTitle, String) {
        (self.title, self.description)
    }
}

/// Payload returned by the add-task form on confirm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskForm {
    /// Title as typed by the user.
    pub title: String,
    /// Optional description; absent values become the empty string.
    #[serde(default)]
    pub description: String,
}

impl TaskForm {
    /// Creates a form payload.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl TryFrom<TaskForm> for TaskDraft {
    type Error = TaskDomainError;

    fn try_from(form: TaskForm) -> Result<Self, Self::Error> {
        Self::new(form.title, form.description)
    }
}

/// Payload returned by the edit-task form on confirm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEdit {
    /// Task being edited.
    pub id: TaskId,
    /// Replacement title.
    pub title: String,
    /// Replacement description.
    #[serde(default)]
    pub description: String,
}

impl TaskEdit {
    /// Creates an edit payload.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Splits the payload into the target identifier and a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is blank.
    pub fn into_draft(self) -> Result<(TaskId, TaskDraft), TaskDomainError> {
        let draft = TaskDraft::new(self.title, self.description)?;
        Ok((self.id, draft))
    }
}
