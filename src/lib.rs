pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::catalog::{BuiltinCatalog, HttpCatalog, JsonFileCatalog, StaticCatalog};
pub use adapters::storage::LocalStorage;
pub use config::{CatalogSource, ExportConfig};
pub use core::{etl::EtlEngine, exporter::CsvExporter, pipeline::ExportPipeline};
pub use domain::cas::{format_cas_number, ShortIdPolicy};
pub use domain::model::{ExportRecord, Material, Record};
pub use utils::error::{EtlError, Result};
