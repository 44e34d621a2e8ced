// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use anyhow::Context as _;
use tokio::signal;
use warp::Filter as _;

use songlib_client::{SongInfoSource, webapi::WebApiSongInfoSource};
use songlib_repo_sqlite::connection::{create_connection_pool, get_pooled_connection};
use songlib_websrv::{
    api::handle_rejection,
    env,
    service::{SongService, SqliteSongService},
};

mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env::init_environment();

    env::init_tracing_and_logging()?;

    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let endpoint_addr = env::parse_endpoint_addr()?;
    tracing::info!("Endpoint address: {endpoint_addr}");

    let database_url = env::parse_database_url()?;
    tracing::info!("Database URL: {database_url}");

    let external_api_url = env::parse_external_api_url()?;
    tracing::info!("External API URL: {external_api_url}");

    let database_connection_pool_size = env::parse_database_connection_pool_size();
    let connection_pool = create_connection_pool(&database_url, database_connection_pool_size)
        .context("Failed to create database connection pool")?;

    {
        let mut pooled_connection = get_pooled_connection(&connection_pool)?;
        songlib_repo_sqlite::initialize_database(&mut pooled_connection)
            .context("Failed to initialize database")?;
        songlib_repo_sqlite::run_migrations(&mut pooled_connection)
            .map_err(|err| anyhow::anyhow!("Failed to migrate database schema: {err}"))?;
    }

    let song_service: Arc<dyn SongService> = Arc::new(SqliteSongService::new(connection_pool));
    let song_info_source: Arc<dyn SongInfoSource> =
        Arc::new(WebApiSongInfoSource::new(&external_api_url)?);

    tracing::info!("Creating service routes");
    let api_filters = routes::api::create_filters(song_service, song_info_source);

    let server = warp::serve(api_filters.recover(handle_rejection));

    tracing::info!("Starting");
    let (socket_addr, server_listener) =
        server.bind_with_graceful_shutdown(endpoint_addr, async move {
            let _ = signal::ctrl_c().await;
            tracing::info!("Stopping");
        });

    tracing::info!("Listening on {socket_addr}");
    server_listener.await;
    tracing::info!("Stopped");

    Ok(())
}
