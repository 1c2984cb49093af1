//! Query specification for owner-scoped task lookups.
//!
//! A single [`TaskQuery`] value replaces the family of per-predicate finder
//! methods a repository would otherwise expose. Adapters translate it into
//! their own filtering mechanism; [`TaskQuery::matches`] is the reference
//! evaluation used by in-memory storage.

use super::{Task, TaskStatus, UserId};
use chrono::{DateTime, Utc};

/// Status predicate of a task query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Status equals the given value.
    Is(TaskStatus),
    /// Status differs from the given value.
    IsNot(TaskStatus),
}

impl StatusFilter {
    /// Returns `true` when `status` satisfies the predicate.
    #[must_use]
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::Is(expected) => status == expected,
            Self::IsNot(excluded) => status != excluded,
        }
    }
}

/// Deadline predicate of a task query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeadlineFilter {
    /// No restriction on the deadline.
    Any,
    /// Only tasks without a deadline.
    Missing,
    /// Deadline is present and not earlier than the bound.
    AtOrAfter(DateTime<Utc>),
    /// Deadline is present and not later than the bound.
    AtOrBefore(DateTime<Utc>),
    /// Deadline is present and within the inclusive range.
    Between(DateTime<Utc>, DateTime<Utc>),
}

impl DeadlineFilter {
    /// Builds the filter for an optional deadline range.
    ///
    /// Absence of both bounds selects tasks with no deadline at all, not
    /// every task.
    #[must_use]
    pub const fn from_bounds(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        match (from, to) {
            (None, None) => Self::Missing,
            (Some(lower), None) => Self::AtOrAfter(lower),
            (None, Some(upper)) => Self::AtOrBefore(upper),
            (Some(lower), Some(upper)) => Self::Between(lower, upper),
        }
    }

    /// Returns `true` when `deadline` satisfies the predicate.
    #[must_use]
    pub fn matches(self, deadline: Option<DateTime<Utc>>) -> bool {
        match (self, deadline) {
            (Self::Any, _) | (Self::Missing, None) => true,
            (Self::AtOrAfter(lower), Some(value)) => value >= lower,
            (Self::AtOrBefore(upper), Some(value)) => value <= upper,
            (Self::Between(lower, upper), Some(value)) => value >= lower && value <= upper,
            (Self::Missing, Some(_))
            | (Self::AtOrAfter(_) | Self::AtOrBefore(_) | Self::Between(_, _), None) => false,
        }
    }
}

/// Owner-scoped task query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskQuery {
    /// Owner whose tasks are selected.
    pub owner: UserId,
    /// Status predicate.
    pub status: StatusFilter,
    /// Deadline predicate.
    pub deadline: DeadlineFilter,
}

impl TaskQuery {
    /// Selects the owner's tasks with the given status.
    #[must_use]
    pub const fn with_status(owner: UserId, status: TaskStatus) -> Self {
        Self {
            owner,
            status: StatusFilter::Is(status),
            deadline: DeadlineFilter::Any,
        }
    }

    /// Selects the owner's tasks whose status differs from `status`.
    #[must_use]
    pub const fn without_status(owner: UserId, status: TaskStatus) -> Self {
        Self {
            owner,
            status: StatusFilter::IsNot(status),
            deadline: DeadlineFilter::Any,
        }
    }

    /// Restricts the query by deadline.
    #[must_use]
    pub const fn with_deadline(self, deadline: DeadlineFilter) -> Self {
        Self { deadline, ..self }
    }

    /// Returns `true` when `task` is selected by this query.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        task.user_id() == self.owner
            && self.status.matches(task.status())
            && self.deadline.matches(task.deadline())
    }
}
