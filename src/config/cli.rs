use crate::config::toml_config::TomlConfig;
use crate::config::{CatalogSource, ExportConfig};
use crate::domain::cas::ShortIdPolicy;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cheminfo-export")]
#[command(about = "Export chemical materials with formatted CAS numbers to CSV")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Read materials from a JSON file instead of the built-in list
    #[arg(long, conflicts_with = "catalog_url")]
    pub catalog_file: Option<String>,

    /// Fetch materials from an HTTP endpoint returning a JSON array
    #[arg(long)]
    pub catalog_url: Option<String>,

    /// Output CSV path (default: cheminfo.csv)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Handling of CAS identifiers shorter than four digits
    #[arg(long, value_enum)]
    pub short_id_policy: Option<ShortIdPolicy>,

    /// HTTP catalog request timeout
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Defaults, then the TOML file, then flags; the result is validated.
    pub fn resolve(&self) -> Result<ExportConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                ExportConfig::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => ExportConfig::default(),
        };

        if let Some(path) = &self.catalog_file {
            config.catalog = CatalogSource::File(path.clone());
        }
        if let Some(url) = &self.catalog_url {
            config.catalog = CatalogSource::Http(url.clone());
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(policy) = self.short_id_policy {
            config.short_id_policy = policy;
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }

        config.validate()?;
        Ok(config)
    }
}
