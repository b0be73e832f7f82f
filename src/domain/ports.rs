use crate::domain::cas::ShortIdPolicy;
use crate::domain::model::{ExportRecord, Record};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The single capability required of a material source.
#[async_trait]
pub trait MaterialCatalog: Send + Sync {
    async fn list_materials(&self) -> Result<Vec<Record>>;

    /// Short label used in log lines.
    fn describe(&self) -> String;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn short_id_policy(&self) -> ShortIdPolicy;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Record>>;
    async fn transform(&self, data: Vec<Record>) -> Result<Vec<ExportRecord>>;
    async fn load(&self, records: Vec<ExportRecord>) -> Result<String>;
}
