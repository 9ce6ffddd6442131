//! InfluxDB MCP server binary.

use anyhow::Result;
use clap::Parser;
use influx_mcp::{ByteTransport, InfluxRouter, Router, RouterService, Server};
use influx_mcp_client::{InfluxApi, InfluxClient, InfluxConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the MCP server.
#[derive(Parser, Debug)]
#[command(name = "influx-mcp")]
#[command(about = "Model Context Protocol server for InfluxDB v2")]
#[command(version)]
struct Args {
    /// Optional TOML configuration file; environment variables override it
    #[arg(short, long, env = "INFLUX_MCP_CONFIG")]
    config: Option<PathBuf>,

    /// InfluxDB base URL
    #[arg(long, env = "INFLUXDB_URL")]
    url: Option<String>,

    /// InfluxDB API token
    #[arg(long, env = "INFLUXDB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Default organization, used to list bucket measurements
    #[arg(long, env = "INFLUXDB_ORG")]
    org: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "INFLUXDB_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

impl Args {
    /// Value of a setting given on the command line or in the environment.
    fn lookup(&self, key: &str) -> Option<String> {
        match key {
            influx_mcp_client::ENV_URL => self.url.clone(),
            influx_mcp_client::ENV_TOKEN => self.token.clone(),
            influx_mcp_client::ENV_ORG => self.org.clone(),
            influx_mcp_client::ENV_TIMEOUT_SECS => self.timeout_secs.map(|t| t.to_string()),
            _ => None,
        }
    }

    fn load_config(&self) -> Result<InfluxConfig> {
        let config = match &self.config {
            Some(path) => InfluxConfig::from_file(path)?.with_overrides(|key| self.lookup(key))?,
            None => InfluxConfig::from_lookup(|key| self.lookup(key))?,
        };
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the MCP protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    let args = Args::parse();
    tracing::info!("Starting InfluxDB MCP server");

    let config = args.load_config()?;
    tracing::info!(url = %config.url(), org = ?config.org(), "Configuration loaded");

    let default_org = config.org().clone();
    let client = InfluxClient::new(config)?;

    match client.health().await {
        Ok(health) if health.is_pass() => {
            tracing::info!(version = ?health.version, "Connected to InfluxDB")
        }
        Ok(health) => {
            tracing::warn!(status = %health.status, message = ?health.message, "InfluxDB reports unhealthy")
        }
        Err(e) => tracing::warn!(error = %e, "InfluxDB health check failed; continuing"),
    }

    let router = InfluxRouter::builder()
        .name("influxdb")
        .version(env!("CARGO_PKG_VERSION"))
        .api(Arc::new(client))
        .default_org(default_org)
        .build();

    tracing::info!(
        tools = router.list_tools().len(),
        resources = router.list_resources().len(),
        "Router initialized"
    );

    let server = Server::new(RouterService(router));
    let transport = ByteTransport::new(stdin(), stdout());

    tracing::info!("Server ready, listening on stdio");
    server.run(transport).await?;

    Ok(())
}
