//! Validated text values carried by tasks, tags, and comments.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of characters in a task title.
pub const MAX_TITLE_CHARS: usize = 255;

/// Maximum number of characters in a task description.
pub const MAX_DESCRIPTION_CHARS: usize = 10_000;

/// Maximum number of characters in a comment.
pub const MAX_COMMENT_CHARS: usize = 10_000;

/// Maximum number of characters in a tag name.
pub const MAX_TAG_NAME_CHARS: usize = 50;

/// Non-blank task title of at most [`MAX_TITLE_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::BlankTitle`] when the value is blank, or
    /// [`TaskDomainError::TitleTooLong`] when it exceeds the length limit.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::BlankTitle);
        }
        check_length(&raw, MAX_TITLE_CHARS, |actual, max| {
            TaskDomainError::TitleTooLong { actual, max }
        })?;
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form task description of at most [`MAX_DESCRIPTION_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DescriptionTooLong`] when the value exceeds
    /// the length limit.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        check_length(&raw, MAX_DESCRIPTION_CHARS, |actual, max| {
            TaskDomainError::DescriptionTooLong { actual, max }
        })?;
        Ok(Self(raw))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Non-blank comment body of at most [`MAX_COMMENT_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentText(String);

impl CommentText {
    /// Creates validated comment text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::BlankCommentText`] when the value is blank,
    /// or [`TaskDomainError::CommentTextTooLong`] when it exceeds the length
    /// limit.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::BlankCommentText);
        }
        check_length(&raw, MAX_COMMENT_CHARS, |actual, max| {
            TaskDomainError::CommentTextTooLong { actual, max }
        })?;
        Ok(Self(raw))
    }

    /// Returns the comment text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Non-blank tag name of at most [`MAX_TAG_NAME_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagName(String);

impl TagName {
    /// Creates a validated tag name. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::BlankTagName`] when the value is blank, or
    /// [`TaskDomainError::TagNameTooLong`] when it exceeds the length limit.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::BlankTagName);
        }
        check_length(trimmed, MAX_TAG_NAME_CHARS, |actual, max| {
            TaskDomainError::TagNameTooLong { actual, max }
        })?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the tag name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! text_traits {
    ($($name:ident),+) => {
        $(
            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    self.as_str()
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )+
    };
}

text_traits!(TaskTitle, TaskDescription, CommentText, TagName);

fn check_length(
    value: &str,
    max: usize,
    too_long: impl FnOnce(usize, usize) -> TaskDomainError,
) -> Result<(), TaskDomainError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(too_long(actual, max));
    }
    Ok(())
}
