//! Identifier types for the task domain.
//!
//! Identifiers are assigned by persistence, so each wraps the numeric key of
//! the backing row rather than generating values on the client side.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a persisted key.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the wrapped key.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a task record.
    TaskId
);

numeric_id!(
    /// Identifier of the task list a task is grouped under.
    TaskListId
);

numeric_id!(
    /// Identifier of a user-scoped tag.
    TagId
);

numeric_id!(
    /// Identifier of a task comment.
    TaskCommentId
);

numeric_id!(
    /// Identifier of the authenticated owner supplied by the identity context.
    ///
    /// The core never re-validates this value; every lookup is simply scoped
    /// by it.
    UserId
);
