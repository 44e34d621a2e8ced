// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Stand-in for the external song info service during local development.
//!
//! Answers every `GET /info` request with the same canned song details.

use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use anyhow::Context as _;
use warp::Filter as _;

use songlib_websrv::env;

// Dedicated variable, deliberately not ENDPOINT_PORT: the mock usually
// runs next to the catalog server and must not collide with its port.
const MOCK_ENDPOINT_PORT_ENV: &str = "MOCK_ENDPOINT_PORT";
const MOCK_ENDPOINT_PORT_DEFAULT: u16 = 8082;

fn endpoint_port(var: Option<&str>) -> anyhow::Result<u16> {
    let Some(var) = var else {
        return Ok(MOCK_ENDPOINT_PORT_DEFAULT);
    };
    var.parse()
        .with_context(|| format!("Failed to parse {MOCK_ENDPOINT_PORT_ENV} = {var}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env::init_environment();
    env::init_tracing_and_logging()?;

    let var = std::env::var(MOCK_ENDPOINT_PORT_ENV).ok();
    let endpoint_addr = SocketAddr::new(
        IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        endpoint_port(var.as_deref())?,
    );

    let info = warp::get()
        .and(warp::path("info"))
        .and(warp::path::end())
        .map(|| {
            warp::reply::json(&serde_json::json!({
                "releaseDate": "16.07.2006",
                "text": "Ooh baby, don't you know I suffer?\nOoh baby, can you hear me moan?",
                "link": "https://www.youtube.com/watch?v=Xsp3_a-PMTw",
            }))
        });

    tracing::info!("Listening on {endpoint_addr}");
    warp::serve(info).run(endpoint_addr).await;

    Ok(())
}
