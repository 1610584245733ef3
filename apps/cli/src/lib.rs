//! # bizledger CLI Library
//!
//! Terminal front end over the Record Service.
//!
//! ## Module Organization
//! ```text
//! bizledger_cli/
//! ├── lib.rs        ◄─── You are here (tracing setup & run)
//! ├── cli.rs        ◄─── clap definitions, argv → Invocation
//! ├── config.rs     ◄─── AppConfig (env + flags)
//! ├── pages.rs      ◄─── Page texts and entry forms
//! ├── handlers.rs   ◄─── Request → Response
//! ├── render.rs     ◄─── Response → text
//! ├── files.rs      ◄─── CSV downloads to disk
//! └── error.rs      ◄─── AppError for handlers
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse arguments (clap)                                              │
//! │  2. Load AppConfig: defaults → BIZLEDGER_* → flags                      │
//! │  3. Initialize logging (stderr, RUST_LOG or default filter)             │
//! │  4. Open database, create tables if missing                             │
//! │  5. Handle one request, print the page (text or --json)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod handlers;
pub mod pages;
pub mod render;

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bizledger_db::{Database, DbConfig, RecordService};

use cli::{Cli, Invocation};
use config::AppConfig;
use error::AppResult;
use handlers::{handle, Request};

/// Initializes the tracing subscriber. Logs go to stderr so page output
/// on stdout stays clean for `--json`.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Health report printed by `bizledger health`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub database: String,
    pub connected: bool,
    pub tables_expected: usize,
    pub tables_present: usize,
}

/// Runs one invocation and returns what to print on stdout.
pub async fn run(cli: Cli, config: AppConfig) -> AppResult<String> {
    let json = cli.json;

    info!(database = %config.database_path.display(), "Opening database");
    let db = Database::new(DbConfig::new(&config.database_path)).await?;
    let service = RecordService::new(db);

    let output = match cli.command.into_invocation() {
        Invocation::Page(request) => page_output(&service, request, json).await?,
        Invocation::Export(page, out) => {
            let dir = config.with_export_dir(out).export_dir;
            let view = handle(&service, Request::Export(page)).await?.view;
            match &view.download {
                Some(download) => {
                    let path = files::save_download(&dir, download)?;
                    if json {
                        serde_json::to_string_pretty(&serde_json::json!({
                            "path": path,
                            "rows": view.records.len(),
                        }))?
                    } else {
                        format!("Wrote {} ({} rows)\n", path.display(), view.records.len())
                    }
                }
                // Nothing to offer for an empty table.
                None => match view.info {
                    Some(info) if !json => format!("{}\n", info),
                    _ => serde_json::to_string_pretty(&view)?,
                },
            }
        }
        Invocation::Health => {
            let db = service.database();
            let (tables_expected, tables_present) =
                bizledger_db::schema::schema_status(db.pool()).await?;
            let health = Health {
                database: config.database_path.display().to_string(),
                connected: db.health_check().await,
                tables_expected,
                tables_present,
            };
            if json {
                serde_json::to_string_pretty(&health)?
            } else {
                format!(
                    "database: {}\nconnected: {}\ntables: {}/{}\n",
                    health.database,
                    health.connected,
                    health.tables_present,
                    health.tables_expected
                )
            }
        }
    };

    service.database().close().await;
    Ok(output)
}

async fn page_output(service: &RecordService, request: Request, json: bool) -> AppResult<String> {
    let response = handle(service, request).await?;

    if json {
        Ok(serde_json::to_string_pretty(&response)?)
    } else {
        Ok(render::render(&response))
    }
}
