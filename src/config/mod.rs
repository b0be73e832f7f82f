#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::catalog::{BuiltinCatalog, HttpCatalog, JsonFileCatalog};
use crate::core::{ConfigProvider, MaterialCatalog};
use crate::domain::cas::ShortIdPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_required_field, validate_url, Validate};
use std::time::Duration;
use toml_config::{SourceKind, TomlConfig};

pub const DEFAULT_OUTPUT_PATH: &str = "cheminfo.csv";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(String),
    Http(String),
}

/// Fully resolved settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub catalog: CatalogSource,
    pub output_path: String,
    pub short_id_policy: ShortIdPolicy,
    pub timeout_seconds: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::Builtin,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            short_id_policy: ShortIdPolicy::default(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ExportConfig {
    /// Layers a TOML file over the defaults. Without an explicit `source`,
    /// a `path` selects a file catalog and a `url` an HTTP one.
    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        let mut config = Self::default();

        if let Some(catalog) = &file.catalog {
            if let Some(timeout) = catalog.timeout_seconds {
                config.timeout_seconds = timeout;
            }

            let kind = catalog.source.unwrap_or(match (&catalog.path, &catalog.url) {
                (Some(_), _) => SourceKind::File,
                (None, Some(_)) => SourceKind::Http,
                (None, None) => SourceKind::Builtin,
            });

            config.catalog = match kind {
                SourceKind::Builtin => CatalogSource::Builtin,
                SourceKind::File => {
                    CatalogSource::File(validate_required_field("catalog.path", &catalog.path)?.clone())
                }
                SourceKind::Http => {
                    CatalogSource::Http(validate_required_field("catalog.url", &catalog.url)?.clone())
                }
            };
        }

        if let Some(export) = &file.export {
            if let Some(path) = &export.output_path {
                config.output_path = path.clone();
            }
            if let Some(policy) = export.short_id_policy {
                config.short_id_policy = policy;
            }
        }

        Ok(config)
    }

    pub fn build_catalog(&self) -> Result<Box<dyn MaterialCatalog>> {
        let catalog: Box<dyn MaterialCatalog> = match &self.catalog {
            CatalogSource::Builtin => Box::new(BuiltinCatalog),
            CatalogSource::File(path) => Box::new(JsonFileCatalog::new(path)),
            CatalogSource::Http(url) => Box::new(HttpCatalog::new(
                url.clone(),
                Duration::from_secs(self.timeout_seconds),
            )?),
        };
        Ok(catalog)
    }
}

impl ConfigProvider for ExportConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn short_id_policy(&self) -> ShortIdPolicy {
        self.short_id_policy
    }
}

impl Validate for ExportConfig {
    fn validate(&self) -> Result<()> {
        validate_path("export.output_path", &self.output_path)?;
        match &self.catalog {
            CatalogSource::Builtin => {}
            CatalogSource::File(path) => validate_path("catalog.path", path)?,
            CatalogSource::Http(url) => validate_url("catalog.url", url)?,
        }
        validate_range("catalog.timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EtlError;

    #[test]
    fn test_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.catalog, CatalogSource::Builtin);
        assert_eq!(config.output_path, "cheminfo.csv");
        assert_eq!(config.short_id_policy, ShortIdPolicy::Reject);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_source_inferred_from_path() {
        let file = TomlConfig::from_toml_str("[catalog]\npath = \"materials.json\"\n").unwrap();
        let config = ExportConfig::from_toml(&file).unwrap();
        assert_eq!(config.catalog, CatalogSource::File("materials.json".to_string()));
    }

    #[test]
    fn test_explicit_source_requires_its_field() {
        let file = TomlConfig::from_toml_str("[catalog]\nsource = \"http\"\n").unwrap();
        assert!(matches!(
            ExportConfig::from_toml(&file),
            Err(EtlError::MissingConfigError { ref field }) if field == "catalog.url"
        ));
    }

    #[test]
    fn test_validation_failures() {
        let bad_url = ExportConfig {
            catalog: CatalogSource::Http("ftp://catalog.example.com".to_string()),
            ..ExportConfig::default()
        };
        assert!(bad_url.validate().is_err());

        let bad_timeout = ExportConfig {
            timeout_seconds: 0,
            ..ExportConfig::default()
        };
        assert!(bad_timeout.validate().is_err());

        let empty_output = ExportConfig {
            output_path: String::new(),
            ..ExportConfig::default()
        };
        assert!(empty_output.validate().is_err());
    }

    #[test]
    fn test_build_catalog_for_each_source() {
        let sources = [
            (CatalogSource::Builtin, "built-in component list"),
            (CatalogSource::File("m.json".to_string()), "file m.json"),
            (
                CatalogSource::Http("http://localhost:9/m".to_string()),
                "http://localhost:9/m",
            ),
        ];
        for (catalog, description) in sources {
            let config = ExportConfig {
                catalog,
                ..ExportConfig::default()
            };
            assert_eq!(config.build_catalog().unwrap().describe(), description);
        }
    }
}
