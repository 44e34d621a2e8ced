// SPDX-FileCopyrightText: Copyright (C) 2026 The songlib authors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    env,
    net::{IpAddr, Ipv6Addr, SocketAddr},
    num::NonZeroU32,
};

use anyhow::Context as _;
use tracing::{Subscriber, subscriber::set_global_default};
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

pub fn init_environment() {
    if let Ok(path) = dotenvy::dotenv() {
        // Print to stderr because logging has not been initialized yet
        eprintln!("Loaded environment from dotenv file {path:?}");
    }
}

const TRACING_SUBSCRIBER_ENV_FILTER_DEFAULT: &str = "info";

fn create_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|err| {
        let rust_log_from_env = env::var("RUST_LOG").ok();
        if let Some(rust_log_from_env) = rust_log_from_env {
            if !rust_log_from_env.is_empty() {
                eprintln!("Failed to parse RUST_LOG environment variable '{rust_log_from_env}': {err}");
            }
        }
        EnvFilter::new(TRACING_SUBSCRIBER_ENV_FILTER_DEFAULT.to_owned())
    })
}

fn create_tracing_subscriber() -> impl Subscriber {
    let env_filter = create_env_filter();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish()
}

pub fn init_tracing_and_logging() -> anyhow::Result<()> {
    // Capture and redirect all log messages as tracing events
    LogTracer::init()?;

    let subscriber = create_tracing_subscriber();
    set_global_default(subscriber)?;

    Ok(())
}

const ENDPOINT_IP_ENV: &str = "ENDPOINT_IP";
const ENDPOINT_IP_DEFAULT: IpAddr = IpAddr::V6(Ipv6Addr::UNSPECIFIED);

const ENDPOINT_PORT_ENV: &str = "ENDPOINT_PORT";

pub fn parse_endpoint_addr() -> anyhow::Result<SocketAddr> {
    let endpoint_ip = if let Ok(var) = env::var(ENDPOINT_IP_ENV) {
        tracing::debug!("{ENDPOINT_IP_ENV} = {var}");
        var.parse()
            .with_context(|| format!("Failed to parse {ENDPOINT_IP_ENV} = {var}"))?
    } else {
        ENDPOINT_IP_DEFAULT
    };
    let var = env::var(ENDPOINT_PORT_ENV)
        .with_context(|| format!("Missing environment variable {ENDPOINT_PORT_ENV}"))?;
    tracing::debug!("{ENDPOINT_PORT_ENV} = {var}");
    let endpoint_port = var
        .parse()
        .with_context(|| format!("Failed to parse {ENDPOINT_PORT_ENV} = {var}"))?;
    Ok((endpoint_ip, endpoint_port).into())
}

const DATABASE_URL_ENV: &str = "DATABASE_URL";

pub fn parse_database_url() -> anyhow::Result<String> {
    let var = env::var(DATABASE_URL_ENV)
        .with_context(|| format!("Missing environment variable {DATABASE_URL_ENV}"))?;
    tracing::debug!("{DATABASE_URL_ENV} = {var}");
    Ok(var)
}

const EXTERNAL_API_URL_ENV: &str = "EXTERNAL_API_URL";

pub fn parse_external_api_url() -> anyhow::Result<String> {
    let var = env::var(EXTERNAL_API_URL_ENV)
        .with_context(|| format!("Missing environment variable {EXTERNAL_API_URL_ENV}"))?;
    tracing::debug!("{EXTERNAL_API_URL_ENV} = {var}");
    Ok(var)
}

const DATABASE_CONNECTION_POOL_SIZE_ENV: &str = "DATABASE_CONNECTION_POOL_SIZE";
const DATABASE_CONNECTION_POOL_SIZE_DEFAULT: NonZeroU32 = match NonZeroU32::new(8) {
    Some(size) => size,
    None => unreachable!(),
};

pub fn parse_database_connection_pool_size() -> NonZeroU32 {
    let Ok(var) = env::var(DATABASE_CONNECTION_POOL_SIZE_ENV) else {
        return DATABASE_CONNECTION_POOL_SIZE_DEFAULT;
    };
    tracing::debug!("{DATABASE_CONNECTION_POOL_SIZE_ENV} = {var}");
    match var.parse::<NonZeroU32>() {
        Ok(pool_size) => pool_size,
        Err(err) => {
            tracing::warn!("Failed to parse {DATABASE_CONNECTION_POOL_SIZE_ENV} = {var}: {err}");
            DATABASE_CONNECTION_POOL_SIZE_DEFAULT
        }
    }
}
