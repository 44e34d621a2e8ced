// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use songlib_core::Song;

use crate::{Pagination, RecordId, RepoResult};

/// Optional constraints narrowing a song listing.
///
/// Every present field is applied conjunctively. `group`, `title`,
/// and `link` match case-insensitive substrings while `release_date`
/// requires an exact match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SongFilter {
    pub group: Option<String>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub link: Option<String>,
}

pub trait SongRepo {
    /// Load a page of (filtered) songs together with the total
    /// number of filtered rows, i.e. the count before pagination.
    ///
    /// The result order is the store default and not guaranteed to
    /// be stable across invocations.
    fn list_songs(
        &mut self,
        filter: &SongFilter,
        pagination: &Pagination,
    ) -> RepoResult<(Vec<(RecordId, Song)>, u64)>;

    fn load_song(&mut self, id: RecordId) -> RepoResult<Song>;

    /// Insert a new song and return the id assigned by the store.
    fn insert_song(&mut self, created_song: &Song) -> RepoResult<RecordId>;

    /// Replace the whole record. Last writer wins, no revision check.
    fn update_song(&mut self, id: RecordId, updated_song: &Song) -> RepoResult<()>;

    /// Delete the record with the given id.
    ///
    /// Deleting a non-existent id is indistinguishable from success.
    fn purge_song(&mut self, id: RecordId) -> RepoResult<()>;
}
