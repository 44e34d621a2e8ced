// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use songlib_core::Song;

use crate::prelude::*;

use super::schema::song;

#[derive(Debug, Queryable)]
pub(crate) struct QueryableRecord {
    pub(crate) row_id: RowId,
    pub(crate) group: String,
    pub(crate) title: String,
    pub(crate) release_date: String,
    pub(crate) text: String,
    pub(crate) link: String,
}

impl From<QueryableRecord> for (RowId, Song) {
    fn from(from: QueryableRecord) -> Self {
        let QueryableRecord {
            row_id,
            group,
            title,
            release_date,
            text,
            link,
        } = from;
        let song = Song {
            group,
            title,
            release_date,
            text,
            link,
        };
        (row_id, song)
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = song)]
pub(crate) struct InsertableRecord<'a> {
    pub(crate) group: &'a str,
    pub(crate) title: &'a str,
    pub(crate) release_date: &'a str,
    pub(crate) text: &'a str,
    pub(crate) link: &'a str,
}

impl<'a> InsertableRecord<'a> {
    pub(crate) fn bind(created_song: &'a Song) -> Self {
        let Song {
            group,
            title,
            release_date,
            text,
            link,
        } = created_song;
        Self {
            group,
            title,
            release_date,
            text,
            link,
        }
    }
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = song)]
pub(crate) struct UpdatableRecord<'a> {
    pub(crate) group: &'a str,
    pub(crate) title: &'a str,
    pub(crate) release_date: &'a str,
    pub(crate) text: &'a str,
    pub(crate) link: &'a str,
}

impl<'a> UpdatableRecord<'a> {
    pub(crate) fn bind(updated_song: &'a Song) -> Self {
        let Song {
            group,
            title,
            release_date,
            text,
            link,
        } = updated_song;
        Self {
            group,
            title,
            release_date,
            text,
            link,
        }
    }
}
