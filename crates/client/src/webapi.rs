// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use async_trait::async_trait;
use url::Url;

use songlib_core::SongDetail;

use crate::{Error, Result, SongInfoSource};

/// Song metadata source backed by a remote web API.
///
/// The remote service is expected to answer
/// `GET {base_url}/info?group=...&song=...` with a JSON-encoded
/// [`SongDetail`] body.
#[derive(Debug, Clone)]
pub struct WebApiSongInfoSource {
    client: reqwest::Client,
    info_url: Url,
}

impl WebApiSongInfoSource {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let mut info_url = format!("{}/info", base_url.trim_end_matches('/'));
        if !info_url.contains("://") {
            // Accept host:port notation without an explicit scheme.
            info_url = format!("http://{info_url}");
        }
        let info_url = info_url.parse()?;
        Ok(Self {
            client: reqwest::Client::new(),
            info_url,
        })
    }
}

#[async_trait]
impl SongInfoSource for WebApiSongInfoSource {
    async fn fetch_song_info(&self, group: &str, title: &str) -> Result<SongDetail> {
        log::debug!(
            "Fetching song info for \"{title}\" by \"{group}\" from {url}",
            url = self.info_url
        );
        let response = self
            .client
            .get(self.info_url.clone())
            .query(&[("group", group), ("song", title)])
            .send()
            .await
            .map_err(|err| Error::LookupFailed(err.into()))?;
        // The response status is not inspected, only the body counts.
        // An error page that doesn't decode as a song detail document
        // is reported as a lookup failure.
        let bytes = response
            .bytes()
            .await
            .map_err(|err| Error::LookupFailed(err.into()))?;
        let song_detail =
            serde_json::from_slice(&bytes).map_err(|err| Error::LookupFailed(err.into()))?;
        Ok(song_detail)
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
