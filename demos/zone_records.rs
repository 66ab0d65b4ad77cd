// # Zone Records Demo
//
// Embeds the DNSimple provider the way an application would: configuration
// comes from the application's own environment, the provider is built
// through the registry, and failures are reported without touching the
// process from inside the library.
//
// ## Usage
//
// ```bash
// # List the zone (read-only, default)
// DNSIMPLE_API_TOKEN=your_token \
// DNSZONE_ZONE=example.com \
// cargo run -p dnszone-demos --bin zone_records
//
// # Also write and remove a TXT record (makes actual changes!)
// DNSZONE_MODE=live \
// DNSIMPLE_SANDBOX=true \
// DNSIMPLE_API_TOKEN=your_token \
// DNSZONE_ZONE=example.com \
// cargo run -p dnszone-demos --bin zone_records
// ```
//
// ## Environment Variables
//
// Required:
// - `DNSIMPLE_API_TOKEN`: DNSimple account token
// - `DNSZONE_ZONE`: Zone to operate on (e.g., "example.com")
//
// Optional:
// - `DNSIMPLE_SANDBOX`: "true" to use the sandbox API (default: false)
// - `DNSZONE_MODE`: "read-only" or "live" (default: read-only)
// - `DNSZONE_LOG_LEVEL`: trace, debug, info, warn, error (default: info)

use anyhow::{Context, Result};
use dnszone_core::{
    ProviderConfig, ProviderRegistry, Record, RecordDeleter, RecordGetter, RecordProvider,
    RecordSetter,
};
use std::env;
use std::process::ExitCode;
use std::time::Duration;
use tracing::Level;

struct DemoConfig {
    api_token: String,
    zone: String,
    sandbox: bool,
    live: bool,
    log_level: Level,
}

impl DemoConfig {
    fn from_env() -> Result<Self> {
        Ok(Self {
            api_token: env::var("DNSIMPLE_API_TOKEN")
                .context("DNSIMPLE_API_TOKEN environment variable is required")?,
            zone: env::var("DNSZONE_ZONE")
                .context("DNSZONE_ZONE environment variable is required")?,
            sandbox: env::var("DNSIMPLE_SANDBOX")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
            live: env::var("DNSZONE_MODE").is_ok_and(|m| m == "live"),
            log_level: env::var("DNSZONE_LOG_LEVEL")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or(Level::INFO),
        })
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match DemoConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return ExitCode::from(1);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::from(2)
        }
    }
}

async fn run(config: &DemoConfig) -> Result<()> {
    let registry = ProviderRegistry::new();
    dnszone_provider_dnsimple::register(&registry);

    let provider_config = ProviderConfig::Dnsimple {
        api_token: config.api_token.clone(),
        sandbox: config.sandbox,
        base_url: None,
        timeout_secs: None,
    };
    let provider = registry.create_provider(&provider_config)?;
    tracing::info!("Using provider: {}", provider.provider_name());

    list_zone(provider.as_ref(), &config.zone).await?;

    if !config.live {
        tracing::info!("Read-only mode: set DNSZONE_MODE=live to exercise writes");
        return Ok(());
    }

    write_and_remove(provider.as_ref(), &config.zone).await
}

async fn list_zone(provider: &dyn RecordProvider, zone: &str) -> Result<()> {
    let records = provider.get_records(zone).await?;

    tracing::info!("Zone {} holds {} record(s)", zone, records.len());
    for record in &records {
        tracing::info!(
            "  [{}] {} {} {} (ttl {}s)",
            record.id.as_deref().unwrap_or("-"),
            display_name(&record.name),
            record.record_type,
            record.value,
            record.ttl_secs()
        );
    }

    Ok(())
}

async fn write_and_remove(provider: &dyn RecordProvider, zone: &str) -> Result<()> {
    let probe = Record::new("TXT", "_dnszone-demo", "dnszone demo record")
        .with_ttl(Duration::from_secs(60));

    let written = match provider.set_records(zone, &[probe]).await {
        Ok(written) => written,
        Err(e) => {
            if e.is_partial() {
                tracing::warn!("{} record(s) were written before the failure", e.completed.len());
            }
            return Err(e).context("writing the demo record");
        }
    };
    tracing::info!("Wrote demo record with ID {}", written[0].id.as_deref().unwrap_or("-"));

    let deleted = provider
        .delete_records(zone, &written)
        .await
        .context("removing the demo record")?;
    tracing::info!("Removed {} demo record(s)", deleted.len());

    Ok(())
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "@" } else { name }
}
