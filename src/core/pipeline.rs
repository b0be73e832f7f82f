use crate::core::builder::build_export_records;
use crate::core::exporter::CsvExporter;
use crate::core::{ConfigProvider, ExportRecord, MaterialCatalog, Pipeline, Record, Storage};
use crate::utils::error::Result;

pub struct ExportPipeline<S: Storage, C: ConfigProvider> {
    catalog: Box<dyn MaterialCatalog>,
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ExportPipeline<S, C> {
    pub fn new(catalog: Box<dyn MaterialCatalog>, storage: S, config: C) -> Self {
        Self {
            catalog,
            storage,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ExportPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        tracing::debug!("Listing materials from {}", self.catalog.describe());
        self.catalog.list_materials().await
    }

    async fn transform(&self, data: Vec<Record>) -> Result<Vec<ExportRecord>> {
        build_export_records(&data, self.config.short_id_policy())
    }

    async fn load(&self, records: Vec<ExportRecord>) -> Result<String> {
        let csv_data = CsvExporter::to_bytes(&records)?;

        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            records.len(),
            csv_data.len(),
            self.config.output_path()
        );
        self.storage
            .write_file(self.config.output_path(), &csv_data)
            .await?;

        Ok(self.config.output_path().to_string())
    }
}
