// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use diesel::dsl::count_star;

use songlib_core::Song;
use songlib_repo::{
    Pagination, RecordId,
    song::{SongFilter, SongRepo},
};

use crate::{
    db::song::{models::*, schema::song},
    prelude::*,
    util::{LIKE_ESCAPE_CHARACTER, escape_like_contains},
};

// Case-insensitive substring matching for group/title/link, exact
// matching for the release date. Absent filters impose no constraint.
// A macro instead of a function so that the same filter conditions can
// be applied to boxed queries with different select clauses.
macro_rules! apply_song_filter {
    ($target:ident, $filter:expr) => {
        if let Some(group) = &$filter.group {
            $target = $target.filter(
                song::group
                    .like(escape_like_contains(group))
                    .escape(LIKE_ESCAPE_CHARACTER),
            );
        }
        if let Some(title) = &$filter.title {
            $target = $target.filter(
                song::title
                    .like(escape_like_contains(title))
                    .escape(LIKE_ESCAPE_CHARACTER),
            );
        }
        if let Some(release_date) = &$filter.release_date {
            $target = $target.filter(song::release_date.eq(release_date.as_str()));
        }
        if let Some(link) = &$filter.link {
            $target = $target.filter(
                song::link
                    .like(escape_like_contains(link))
                    .escape(LIKE_ESCAPE_CHARACTER),
            );
        }
    };
}

impl SongRepo for Connection<'_> {
    fn list_songs(
        &mut self,
        filter: &SongFilter,
        pagination: &Pagination,
    ) -> RepoResult<(Vec<(RecordId, Song)>, u64)> {
        // The total count refers to all filtered rows, before pagination.
        let mut count_target = song::table.select(count_star()).into_boxed();
        apply_song_filter!(count_target, filter);
        let total = count_target
            .get_result::<i64>(self.as_mut())
            .map_err(repo_error)?;
        debug_assert!(total >= 0);

        let Pagination { offset, limit } = *pagination;
        // Deliberately no ORDER BY, the result order is the store default.
        let mut target = song::table.into_boxed();
        apply_song_filter!(target, filter);
        let records = target
            .limit(limit)
            .offset(offset)
            .load::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)?;
        log::debug!(
            "Loaded {num_songs} of {total} songs",
            num_songs = records.len()
        );

        let songs = records.into_iter().map(Into::into).collect();
        Ok((songs, total as u64))
    }

    fn load_song(&mut self, id: RecordId) -> RepoResult<Song> {
        song::table
            .filter(song::row_id.eq(id))
            .first::<QueryableRecord>(self.as_mut())
            .map_err(repo_error)
            .map(|record| {
                let (_, song) = record.into();
                song
            })
    }

    fn insert_song(&mut self, created_song: &Song) -> RepoResult<RecordId> {
        let insertable = InsertableRecord::bind(created_song);
        diesel::insert_into(song::table)
            .values(&insertable)
            .returning(song::row_id)
            .get_result::<RowId>(self.as_mut())
            .map_err(repo_error)
    }

    fn update_song(&mut self, id: RecordId, updated_song: &Song) -> RepoResult<()> {
        let updatable = UpdatableRecord::bind(updated_song);
        let target = song::table.filter(song::row_id.eq(id));
        let rows_affected: usize = diesel::update(target)
            .set(&updatable)
            .execute(self.as_mut())
            .map_err(repo_error)?;
        debug_assert!(rows_affected <= 1);
        if rows_affected < 1 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    fn purge_song(&mut self, id: RecordId) -> RepoResult<()> {
        let target = song::table.filter(song::row_id.eq(id));
        let rows_affected: usize = diesel::delete(target)
            .execute(self.as_mut())
            .map_err(repo_error)?;
        debug_assert!(rows_affected <= 1);
        // Purging a non-existent row is not an error.
        Ok(())
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;
