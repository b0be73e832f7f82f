use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting export");

        let materials = self.pipeline.extract().await?;
        tracing::info!("Extracted {} materials", materials.len());

        let records = self.pipeline.transform(materials).await?;
        tracing::info!("Transformed {} records", records.len());

        let output_path = self.pipeline.load(records).await?;
        tracing::debug!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
