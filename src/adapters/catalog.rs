use crate::core::{MaterialCatalog, Record};
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

const BUILTIN_COMPONENTS: &str = include_str!("../../data/components.json");

/// Accepts only a JSON array of objects.
fn parse_records(data: &[u8]) -> Result<Vec<Record>> {
    let json_data: serde_json::Value = serde_json::from_slice(data)?;

    let serde_json::Value::Array(items) = json_data else {
        return Err(EtlError::CatalogError {
            message: "expected a JSON array of materials".to_string(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            serde_json::Value::Object(obj) => Ok(Record {
                data: obj.into_iter().collect(),
            }),
            other => Err(EtlError::CatalogError {
                message: format!("entry #{} is not an object: {}", index, other),
            }),
        })
        .collect()
}

/// Common process-safety components shipped with the binary.
#[derive(Debug, Clone, Default)]
pub struct BuiltinCatalog;

#[async_trait]
impl MaterialCatalog for BuiltinCatalog {
    async fn list_materials(&self) -> Result<Vec<Record>> {
        parse_records(BUILTIN_COMPONENTS.as_bytes())
    }

    fn describe(&self) -> String {
        "built-in component list".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MaterialCatalog for JsonFileCatalog {
    async fn list_materials(&self) -> Result<Vec<Record>> {
        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|e| EtlError::CatalogError {
                message: format!("cannot read {}: {}", self.path.display(), e),
            })?;
        parse_records(&data)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

pub struct HttpCatalog {
    endpoint: String,
    client: Client,
}

impl HttpCatalog {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl MaterialCatalog for HttpCatalog {
    async fn list_materials(&self) -> Result<Vec<Record>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(EtlError::CatalogError {
                message: format!("{} returned HTTP {}", self.endpoint, status),
            });
        }

        let body = response.bytes().await?;
        parse_records(&body)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// Fixed in-memory records.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    records: Vec<Record>,
}

impl StaticCatalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl MaterialCatalog for StaticCatalog {
    async fn list_materials(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::build_export_records;
    use crate::domain::cas::ShortIdPolicy;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_builtin_catalog_is_well_formed() {
        let records = BuiltinCatalog.list_materials().await.unwrap();
        assert!(!records.is_empty());

        let exported = build_export_records(&records, ShortIdPolicy::Reject).unwrap();
        assert_eq!(exported[0].cas_no, "7732-18-5");
        assert!(exported
            .iter()
            .all(|r| crate::domain::cas::check_digit_is_valid(r.cas_id)));
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_records(br#"{"cas_id": 7732185, "name": "Water"}"#).unwrap_err();
        assert!(matches!(err, EtlError::CatalogError { .. }));

        let err = parse_records(br#"[{"cas_id": 7732185}, 42]"#).unwrap_err();
        assert!(matches!(err, EtlError::CatalogError { ref message } if message.contains("#1")));

        assert!(matches!(
            parse_records(b"not json").unwrap_err(),
            EtlError::SerializationError(_)
        ));
    }

    #[tokio::test]
    async fn test_json_file_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("materials.json");
        std::fs::write(&path, r#"[{"cas_id": 74828, "name": "Methane"}]"#).unwrap();

        let records = JsonFileCatalog::new(&path).list_materials().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].data.get("cas_id").unwrap().as_u64(), Some(74828));
    }

    #[tokio::test]
    async fn test_json_file_catalog_missing_file() {
        let catalog = JsonFileCatalog::new("/nonexistent/materials.json");
        let err = catalog.list_materials().await.unwrap_err();

        assert!(matches!(
            err,
            EtlError::CatalogError { ref message } if message.contains("/nonexistent/materials.json")
        ));
        let message = err.user_friendly_message();
        assert!(!message.contains("write"), "{message}");
        assert!(!err.recovery_suggestion().contains("output directory"));
        assert_eq!(err.severity().exit_code(), 1);
    }

    #[tokio::test]
    async fn test_http_catalog_success() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/materials");
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(serde_json::json!([
                        {"cas_id": 7732185, "name": "Water"},
                        {"cas_id": 7664417, "name": "Ammonia"}
                    ]));
            })
            .await;

        let catalog = HttpCatalog::new(server.url("/materials"), Duration::from_secs(5)).unwrap();
        let records = catalog.list_materials().await.unwrap();

        api_mock.assert_async().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].data.get("name").unwrap(), "Ammonia");
    }

    #[tokio::test]
    async fn test_http_catalog_error_status() {
        let server = MockServer::start_async().await;
        let api_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/materials");
                then.status(500);
            })
            .await;

        let catalog = HttpCatalog::new(server.url("/materials"), Duration::from_secs(5)).unwrap();
        let err = catalog.list_materials().await.unwrap_err();

        api_mock.assert_async().await;
        assert!(matches!(err, EtlError::CatalogError { ref message } if message.contains("500")));
    }
}
