pub mod builder;
pub mod etl;
pub mod exporter;
pub mod pipeline;

pub use crate::domain::model::{ExportRecord, Material, Record};
pub use crate::domain::ports::{ConfigProvider, MaterialCatalog, Pipeline, Storage};
pub use crate::utils::error::Result;
