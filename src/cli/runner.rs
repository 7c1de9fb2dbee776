//! CLI runner - executes commands

use crate::api::{ApiClient, Category, Episode, ResourceId, Show};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::pagination::Paginated;
use crate::types::LogLevel;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Anything the runner can print in `pretty` format
pub trait Listing {
    fn row(&self) -> String;
}

impl Listing for Category {
    fn row(&self) -> String {
        format!("{:>6}  {}", self.id, self.title)
    }
}

impl Listing for Show {
    fn row(&self) -> String {
        format!("{:>6}  {}", self.id, self.title)
    }
}

impl Listing for Episode {
    fn row(&self) -> String {
        let date = self
            .broadcast_date()
            .map_or_else(|| "----------".to_string(), |d| d.to_string());
        let kind = if self.is_clip() { "clip" } else { "" };
        format!("{:>6}  {date}  {:<4}  {}", self.id, kind, self.title)
    }
}

/// Log filter for the binary: `RUST_LOG` when set, otherwise `level`
pub fn log_filter(level: LogLevel, rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| {
            let level = LevelFilter::from(tracing::Level::from(level));
            EnvFilter::default().add_directive(level.into())
        })
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve config: file, then environment, then flags
    pub fn config(&self) -> Result<ClientConfig> {
        let config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        let mut config = config.with_env();
        if let Some(url) = &self.cli.base_url {
            config.base_url.clone_from(url);
        }
        if let Some(level) = self.cli.log_level {
            config.log_level = level;
        }
        config.validate()?;
        Ok(config)
    }

    /// Run the CLI command, writing to stdout
    pub async fn run(&self) -> Result<()> {
        let config = self.config()?;
        let client = ApiClient::from_config(&config).await?;
        let stdout = std::io::stdout();
        self.run_with(&client, &mut stdout.lock()).await
    }

    /// Run the CLI command against an existing client
    pub async fn run_with(&self, client: &ApiClient, out: &mut impl Write) -> Result<()> {
        match &self.cli.command {
            Commands::Endpoints => self.endpoints(client, out),
            Commands::Categories => self.list(client.categories()?, out).await,
            Commands::Shows { category } => {
                let id = ResourceId::from(category.as_str());
                self.list(client.shows_by_category_id(id)?, out).await
            }
            Commands::Episodes { show } => {
                let id = ResourceId::from(show.as_str());
                self.list(client.episodes_by_show_id(id)?, out).await
            }
            Commands::Recommended => self.list(client.recommended_episodes()?, out).await,
            Commands::Latest => self.list(client.latest_episodes()?, out).await,
        }
    }

    fn endpoints(&self, client: &ApiClient, out: &mut impl Write) -> Result<()> {
        for key in client.endpoints().keys() {
            let Some(descriptor) = client.endpoint(key) else {
                continue;
            };
            match self.cli.format {
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    json!({"name": key, "list_endpoint": descriptor.list_endpoint})
                )?,
                OutputFormat::Pretty => {
                    writeln!(out, "{key:<12}  {}", descriptor.list_endpoint)?;
                }
            }
        }
        Ok(())
    }

    async fn list<T>(&self, sequence: Paginated<T>, out: &mut impl Write) -> Result<()>
    where
        T: DeserializeOwned + Clone + Serialize + Listing,
    {
        let mut cursor = sequence.cursor();
        let mut printed = 0;

        while self.cli.limit.map_or(true, |limit| printed < limit) {
            let Some(item) = cursor.next().await? else {
                break;
            };
            match self.cli.format {
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&item)?)?,
                OutputFormat::Pretty => writeln!(out, "{}", item.row())?,
            }
            printed += 1;
        }

        if let Some(fault) = sequence.fault() {
            warn!("Listing is incomplete: {fault}");
        }
        Ok(())
    }
}
