// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

pub mod song;

/// Row id assigned by the storage backend.
pub type RecordId = i64;

pub type PaginationOffset = i64;

pub type PaginationLimit = i64;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub offset: PaginationOffset,
    pub limit: PaginationLimit,
}

impl Pagination {
    /// Derive the row offset from 1-based page parameters.
    ///
    /// The offset is computed without clamping. Callers passing
    /// `page <= 0` produce a negative offset, which SQLite treats
    /// as zero.
    #[must_use]
    pub const fn from_page_and_limit(page: i64, limit: PaginationLimit) -> Self {
        Self {
            offset: (page - 1) * limit,
            limit,
        }
    }
}

#[derive(Error, Debug)]
pub enum RepoError {
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_from_page_and_limit() {
        assert_eq!(
            Pagination {
                offset: 0,
                limit: 10
            },
            Pagination::from_page_and_limit(1, 10)
        );
        assert_eq!(
            Pagination {
                offset: 20,
                limit: 10
            },
            Pagination::from_page_and_limit(3, 10)
        );
        // No clamping for out-of-range pages.
        assert_eq!(
            Pagination {
                offset: -10,
                limit: 10
            },
            Pagination::from_page_and_limit(0, 10)
        );
    }
}
