// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use stringsvc::config::{resolve_config, LogFormat, LoggingConfig};
use stringsvc::endpoints::EndpointSet;
use stringsvc::observability::messages::server::ServerStarting;
use stringsvc::observability::messages::StructuredLog;
use stringsvc::service::BasicStringService;
use stringsvc::transport::{bind_listener, serve, string_routes};

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&logging.filter)
        .with_context(|| format!("invalid log filter '{}'", logging.filter))?;
    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).try_init()?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 || args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [config.yaml|config.toml]", args[0]);
        eprintln!("Example: {} configs/stringsvc.yaml", args[0]);
        std::process::exit(2);
    }

    let config = resolve_config(args.get(1)).context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    let address = config.server.bind_address()?;
    let service = BasicStringService::from_config(&config.service);
    let policy = service.truncate_policy().to_string();
    let start_msg = ServerStarting {
        address,
        truncate_policy: &policy,
    };
    let span = start_msg.span("server");
    start_msg.log();

    run(address, service).instrument(span).await
}

async fn run(address: SocketAddr, service: BasicStringService) -> anyhow::Result<()> {
    let routes = string_routes(EndpointSet::from_service(Arc::new(service)))?;
    let listener = bind_listener(address).await?;

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => signal_token.cancel(),
            Err(e) => tracing::warn!(error = %e, "failed to listen for ctrl-c"),
        }
    });

    serve(listener, routes, shutdown).await?;
    Ok(())
}
