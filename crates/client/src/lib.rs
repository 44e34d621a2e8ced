// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use async_trait::async_trait;
use thiserror::Error;

use songlib_core::SongDetail;

pub mod webapi;

#[derive(Error, Debug)]
pub enum Error {
    #[error("lookup failed: {0}")]
    LookupFailed(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Source of supplementary song metadata.
///
/// Implementations resolve the detail fields of a song that are not
/// provided by the caller, keyed by group name and song title.
#[async_trait]
pub trait SongInfoSource: Send + Sync {
    async fn fetch_song_info(&self, group: &str, title: &str) -> Result<SongDetail>;
}
