// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{convert::Infallible, sync::Arc};

use semval::prelude::*;
use serde::{Deserialize, Serialize};
use warp::{Filter, Reply, filters::BoxedFilter, http::StatusCode, reject::Rejection};

use songlib_client::SongInfoSource;
use songlib_core::{Song, SongDetail};
use songlib_repo::{Pagination, RecordId, song::SongFilter};
use songlib_websrv::{api::reject_on_error, service::SongService};

const DEFAULT_PAGE: i64 = 1;
const LIST_DEFAULT_LIMIT: i64 = 10;
const TEXT_DEFAULT_LIMIT: i64 = 1;

/// Parse a numeric query parameter leniently.
///
/// Both a missing parameter and one that does not parse as a number
/// fall back to the given default.
fn parse_numeric_param(param: Option<&str>, default: i64) -> i64 {
    param.and_then(|var| var.parse().ok()).unwrap_or(default)
}

/// Empty filter values impose no constraint, like absent ones.
fn non_empty_filter_param(param: Option<String>) -> Option<String> {
    param.filter(|var| !var.is_empty())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SongListQueryParams {
    page: Option<String>,
    limit: Option<String>,
    group: Option<String>,
    song: Option<String>,
    release_date: Option<String>,
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SongTextQueryParams {
    page: Option<String>,
    limit: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreateSongRequestBody {
    group: String,

    #[serde(rename = "song")]
    title: String,
}

/// Partial update, fields absent from the body retain their prior
/// values. An id in the body is ignored, the path parameter counts.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateSongRequestBody {
    group: Option<String>,

    #[serde(rename = "song")]
    title: Option<String>,

    release_date: Option<String>,

    text: Option<String>,

    link: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SongResponseBody {
    id: RecordId,
    group: String,

    #[serde(rename = "song")]
    title: String,

    release_date: String,
    text: String,
    link: String,
}

impl From<(RecordId, Song)> for SongResponseBody {
    fn from((id, song): (RecordId, Song)) -> Self {
        let Song {
            group,
            title,
            release_date,
            text,
            link,
        } = song;
        Self {
            id,
            group,
            title,
            release_date,
            text,
            link,
        }
    }
}

#[derive(Debug, Serialize)]
struct SongListResponseBody {
    total: u64,
    items: Vec<SongResponseBody>,
}

#[derive(Debug, Serialize)]
struct SongTextResponseBody {
    total: u64,
    verses: Vec<String>,
}

fn with_song_service(
    song_service: Arc<dyn SongService>,
) -> impl Filter<Extract = (Arc<dyn SongService>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&song_service))
}

fn with_song_info_source(
    song_info_source: Arc<dyn SongInfoSource>,
) -> impl Filter<Extract = (Arc<dyn SongInfoSource>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&song_info_source))
}

async fn handle_list_songs(
    query_params: SongListQueryParams,
    song_service: Arc<dyn SongService>,
) -> Result<impl Reply, Rejection> {
    let SongListQueryParams {
        page,
        limit,
        group,
        song,
        release_date,
        link,
    } = query_params;
    let page = parse_numeric_param(page.as_deref(), DEFAULT_PAGE);
    let limit = parse_numeric_param(limit.as_deref(), LIST_DEFAULT_LIMIT);
    let pagination = Pagination::from_page_and_limit(page, limit);
    let filter = SongFilter {
        group: non_empty_filter_param(group),
        title: non_empty_filter_param(song),
        release_date: non_empty_filter_param(release_date),
        link: non_empty_filter_param(link),
    };
    let (songs, total) = song_service
        .list_songs(filter, pagination)
        .await
        .map_err(reject_on_error)?;
    let items = songs.into_iter().map(Into::into).collect();
    Ok(warp::reply::json(&SongListResponseBody { total, items }))
}

async fn handle_load_song_text(
    id: RecordId,
    query_params: SongTextQueryParams,
    song_service: Arc<dyn SongService>,
) -> Result<impl Reply, Rejection> {
    let song = song_service.load_song(id).await.map_err(reject_on_error)?;
    let verses = song.verses();
    let total = verses.len();

    let SongTextQueryParams { page, limit } = query_params;
    let page = parse_numeric_param(page.as_deref(), DEFAULT_PAGE);
    let limit = parse_numeric_param(limit.as_deref(), TEXT_DEFAULT_LIMIT);
    // An out-of-range page yields an empty slice, not an error.
    let start = usize::try_from((page - 1).saturating_mul(limit))
        .unwrap_or(0)
        .min(total);
    let end = start
        .saturating_add(usize::try_from(limit).unwrap_or(0))
        .min(total);

    let verses = verses[start..end].iter().map(ToString::to_string).collect();
    Ok(warp::reply::json(&SongTextResponseBody {
        total: total as u64,
        verses,
    }))
}

async fn handle_create_song(
    request_body: CreateSongRequestBody,
    song_service: Arc<dyn SongService>,
    song_info_source: Arc<dyn SongInfoSource>,
) -> Result<impl Reply, Rejection> {
    let CreateSongRequestBody { group, title } = request_body;
    let new_song = Song {
        group,
        title,
        ..Default::default()
    };
    if let Err(context) = new_song.validate() {
        return Err(reject_on_error(songlib_websrv::api::Error::BadRequest(
            anyhow::anyhow!("Invalid song input: {context:?}"),
        )));
    }

    let SongDetail {
        release_date,
        text,
        link,
    } = song_info_source
        .fetch_song_info(&new_song.group, &new_song.title)
        .await
        .map_err(reject_on_error)?;
    let new_song = Song {
        release_date,
        text,
        link,
        ..new_song
    };

    let id = song_service
        .create_song(new_song.clone())
        .await
        .map_err(reject_on_error)?;
    let response_body = SongResponseBody::from((id, new_song));
    Ok(warp::reply::with_status(
        warp::reply::json(&response_body),
        StatusCode::CREATED,
    ))
}

async fn handle_update_song(
    id: RecordId,
    request_body: UpdateSongRequestBody,
    song_service: Arc<dyn SongService>,
) -> Result<impl Reply, Rejection> {
    let mut song = song_service.load_song(id).await.map_err(reject_on_error)?;

    let UpdateSongRequestBody {
        group,
        title,
        release_date,
        text,
        link,
    } = request_body;
    if let Some(group) = group {
        song.group = group;
    }
    if let Some(title) = title {
        song.title = title;
    }
    if let Some(release_date) = release_date {
        song.release_date = release_date;
    }
    if let Some(text) = text {
        song.text = text;
    }
    if let Some(link) = link {
        song.link = link;
    }

    song_service
        .update_song(id, song.clone())
        .await
        .map_err(reject_on_error)?;
    Ok(warp::reply::json(&SongResponseBody::from((id, song))))
}

async fn handle_delete_song(
    id: RecordId,
    song_service: Arc<dyn SongService>,
) -> Result<impl Reply, Rejection> {
    // Deleting a non-existent song is indistinguishable from success.
    song_service.delete_song(id).await.map_err(reject_on_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn create_filters(
    song_service: Arc<dyn SongService>,
    song_info_source: Arc<dyn SongInfoSource>,
) -> BoxedFilter<(impl Reply,)> {
    let songs_path = warp::path("songs");
    let path_param_id = warp::path::param::<RecordId>();

    let songs_list = warp::get()
        .and(songs_path)
        .and(warp::path::end())
        .and(warp::query())
        .and(with_song_service(Arc::clone(&song_service)))
        .and_then(handle_list_songs);

    let songs_text = warp::get()
        .and(songs_path)
        .and(path_param_id)
        .and(warp::path("text"))
        .and(warp::path::end())
        .and(warp::query())
        .and(with_song_service(Arc::clone(&song_service)))
        .and_then(handle_load_song_text);

    let songs_create = warp::post()
        .and(songs_path)
        .and(warp::path::end())
        .and(warp::body::json())
        .and(with_song_service(Arc::clone(&song_service)))
        .and(with_song_info_source(song_info_source))
        .and_then(handle_create_song);

    let songs_update = warp::put()
        .and(songs_path)
        .and(path_param_id)
        .and(warp::path::end())
        .and(warp::body::json())
        .and(with_song_service(Arc::clone(&song_service)))
        .and_then(handle_update_song);

    let songs_delete = warp::delete()
        .and(songs_path)
        .and(path_param_id)
        .and(warp::path::end())
        .and(with_song_service(song_service))
        .and_then(handle_delete_song);

    songs_list
        .or(songs_text)
        .or(songs_create)
        .or(songs_update)
        .or(songs_delete)
        .boxed()
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
