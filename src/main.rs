//! ItemSearch-RS: tenant-scoped catalog search over the Elasticsearch HTTP API
//!
//! This is the main entry point: it provisions the items index if needed
//! and runs one tenant-scoped search from the command line.

use anyhow::Result;
use itemsearch_rs::{config::Settings, error::Error, network::EngineClient};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }
    let (tenant_id, query_text) = match args.as_slice() {
        [tenant, query] => (tenant.clone(), query.clone()),
        _ => {
            print_usage();
            anyhow::bail!("expected exactly two arguments: <tenant-id> <query>");
        }
    };

    info!("Starting ItemSearch-RS v{}", itemsearch_rs::VERSION);

    // Load configuration
    let settings = load_settings()?;
    info!("Using search engine at {}", settings.engine.url);

    // Initialize the engine client
    let client = EngineClient::with_settings(&settings)?;

    // Verify the engine is reachable before touching the index
    client.ping().await?;

    // Provision the index; an existing index is fine at bootstrap
    match client.create_index().await {
        Ok(()) => {}
        Err(Error::IndexExists { index }) => {
            warn!("index {} already exists, keeping it", index);
        }
        Err(err) => return Err(err.into()),
    }

    // Run the search
    let items = client.search(&tenant_id, &query_text).await?;
    info!("{} item(s) matched for tenant {}", items.len(), tenant_id);
    for item in items {
        println!("{}\t{}\t{}", item.id, item.name, item.categories);
    }

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/itemsearch/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("itemsearch-rs/settings.yml"))
            .unwrap_or_default(),
    ];

    // Check environment variable first
    if let Ok(path) = std::env::var("ITEMSEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Try each default path
    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
ItemSearch-RS v{}
Tenant-scoped catalog search over the Elasticsearch HTTP API

USAGE:
    itemsearch-rs <tenant-id> <query>

ENVIRONMENT VARIABLES:
    ITEMSEARCH_SETTINGS_PATH     Path to settings.yml
    ITEMSEARCH_ENGINE_URL        Search engine base URL
    ITEMSEARCH_INDEX             Index name (default: items)
    ITEMSEARCH_PAGE_SIZE         Page size requested on searches
    ITEMSEARCH_REQUEST_TIMEOUT   Request timeout in seconds
"#,
        itemsearch_rs::VERSION
    );
}
