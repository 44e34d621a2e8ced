// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use async_trait::async_trait;

use songlib_core::Song;
use songlib_repo::{
    Pagination, RecordId, RepoError, RepoResult,
    song::{SongFilter, SongRepo as _},
};
use songlib_repo_sqlite::{
    DbConnection,
    connection::{ConnectionPool, get_pooled_connection},
    prelude::Connection,
};

/// Asynchronous facade of the song store.
///
/// Request handlers only depend on this trait, not on the underlying
/// storage backend.
#[async_trait]
pub trait SongService: Send + Sync {
    async fn list_songs(
        &self,
        filter: SongFilter,
        pagination: Pagination,
    ) -> RepoResult<(Vec<(RecordId, Song)>, u64)>;

    async fn load_song(&self, id: RecordId) -> RepoResult<Song>;

    async fn create_song(&self, new_song: Song) -> RepoResult<RecordId>;

    async fn update_song(&self, id: RecordId, updated_song: Song) -> RepoResult<()>;

    async fn delete_song(&self, id: RecordId) -> RepoResult<()>;
}

#[derive(Debug, Clone)]
pub struct SqliteSongService {
    connection_pool: ConnectionPool,
}

impl SqliteSongService {
    #[must_use]
    pub fn new(connection_pool: ConnectionPool) -> Self {
        Self { connection_pool }
    }

    /// Run a repository task on a blocking thread.
    ///
    /// Requesting a pooled connection may block the current thread and
    /// must not happen on an executor thread.
    async fn spawn_blocking_repo_task<H, R>(&self, connection_handler: H) -> RepoResult<R>
    where
        H: FnOnce(&mut DbConnection) -> RepoResult<R> + Send + 'static,
        R: Send + 'static,
    {
        let connection_pool = self.connection_pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut pooled_connection = get_pooled_connection(&connection_pool)
                .map_err(|err| RepoError::Other(err.into()))?;
            connection_handler(&mut pooled_connection)
        })
        .await
        .map_err(|err| RepoError::Other(err.into()))?
    }
}

#[async_trait]
impl SongService for SqliteSongService {
    async fn list_songs(
        &self,
        filter: SongFilter,
        pagination: Pagination,
    ) -> RepoResult<(Vec<(RecordId, Song)>, u64)> {
        self.spawn_blocking_repo_task(move |db| Connection::new(db).list_songs(&filter, &pagination))
            .await
    }

    async fn load_song(&self, id: RecordId) -> RepoResult<Song> {
        self.spawn_blocking_repo_task(move |db| Connection::new(db).load_song(id))
            .await
    }

    async fn create_song(&self, new_song: Song) -> RepoResult<RecordId> {
        self.spawn_blocking_repo_task(move |db| Connection::new(db).insert_song(&new_song))
            .await
    }

    async fn update_song(&self, id: RecordId, updated_song: Song) -> RepoResult<()> {
        self.spawn_blocking_repo_task(move |db| Connection::new(db).update_song(id, &updated_song))
            .await
    }

    async fn delete_song(&self, id: RecordId) -> RepoResult<()> {
        self.spawn_blocking_repo_task(move |db| Connection::new(db).purge_song(id))
            .await
    }
}
