//! Pagination requests and the bounds they resolve to.

use super::TaskDomainError;
use std::num::NonZeroU32;

/// Caller-supplied page descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    offset: u64,
    page_size: NonZeroU32,
}

impl PageRequest {
    /// Creates a page starting at `offset` and holding at most `page_size`
    /// items.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ZeroPageSize`] when `page_size` is zero.
    pub fn new(offset: u64, page_size: u32) -> Result<Self, TaskDomainError> {
        let size = NonZeroU32::new(page_size).ok_or(TaskDomainError::ZeroPageSize)?;
        Ok(Self {
            offset,
            page_size: size,
        })
    }

    /// Creates the zero-based `page` of size `page_size`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::ZeroPageSize`] when `page_size` is zero, or
    /// [`TaskDomainError::PageOffsetOverflow`] when the resulting offset does
    /// not fit in `u64`.
    pub fn from_page_number(page: u64, page_size: u32) -> Result<Self, TaskDomainError> {
        let offset = page
            .checked_mul(u64::from(page_size))
            .ok_or(TaskDomainError::PageOffsetOverflow { page, page_size })?;
        Self::new(offset, page_size)
    }

    /// Returns the number of items to skip.
    #[must_use]
    pub const fn offset(self) -> u64 {
        self.offset
    }

    /// Returns the maximum number of items on the page.
    #[must_use]
    pub const fn page_size(self) -> NonZeroU32 {
        self.page_size
    }
}

/// Concrete query bounds handed to repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PageBounds {
    /// Number of items to skip.
    pub offset: u64,
    /// Maximum number of items to return; `None` means unlimited.
    pub limit: Option<NonZeroU32>,
}

impl PageBounds {
    /// Bounds that select every item.
    pub const UNBOUNDED: Self = Self {
        offset: 0,
        limit: None,
    };

    /// Resolves an optional page request into query bounds.
    ///
    /// No request means no paging: offset zero and no limit.
    #[must_use]
    pub const fn resolve(page: Option<PageRequest>) -> Self {
        match page {
            Some(request) => Self {
                offset: request.offset,
                limit: Some(request.page_size),
            },
            None => Self::UNBOUNDED,
        }
    }

    /// Applies the bounds to an already ordered iterator.
    pub fn apply<T>(self, items: impl Iterator<Item = T>) -> Vec<T> {
        let skip = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let skipped = items.skip(skip);
        match self.limit {
            Some(limit) => skipped
                .take(usize::try_from(limit.get()).unwrap_or(usize::MAX))
                .collect(),
            None => skipped.collect(),
        }
    }
}

impl From<Option<PageRequest>> for PageBounds {
    fn from(page: Option<PageRequest>) -> Self {
        Self::resolve(page)
    }
}
