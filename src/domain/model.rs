use crate::domain::cas::{format_cas_number, ShortIdPolicy};
use crate::utils::error::{EtlError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A raw catalog entry, as delivered by a `MaterialCatalog`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn material(cas_id: u64, name: &str) -> Self {
        let mut data = HashMap::new();
        data.insert("cas_id".to_string(), serde_json::Value::from(cas_id));
        data.insert("name".to_string(), serde_json::Value::from(name));
        Self { data }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    pub cas_id: u64,
    pub name: String,
}

impl Material {
    /// Reads `cas_id` and `name` out of the record at position `index`.
    ///
    /// An absent or null field is `MissingField`. `cas_id` must be a
    /// non-negative integer or a string of ASCII digits; anything else is
    /// `InvalidIdentifier`. Non-string names are rendered as JSON text.
    pub fn from_record(index: usize, record: &Record) -> Result<Self> {
        let missing = |field: &str| EtlError::MissingField {
            index,
            field: field.to_string(),
        };

        let cas_id = match record.data.get("cas_id") {
            None | Some(serde_json::Value::Null) => return Err(missing("cas_id")),
            Some(value) => parse_cas_id(value)?,
        };

        let name = match record.data.get("name") {
            None | Some(serde_json::Value::Null) => return Err(missing("name")),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };

        Ok(Self { cas_id, name })
    }
}

fn parse_cas_id(value: &serde_json::Value) -> Result<u64> {
    let invalid = |reason: &str| EtlError::InvalidIdentifier {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| invalid("must be a non-negative integer")),
        serde_json::Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse::<u64>().map_err(|_| invalid("too large"))
        }
        _ => Err(invalid("must be a non-negative integer")),
    }
}

/// One row of `cheminfo.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub cas_id: u64,
    pub cas_no: String,
    pub chem_name: String,
}

impl ExportRecord {
    pub const HEADERS: [&'static str; 3] = ["cas_id", "cas_no", "chem_name"];

    pub fn from_material(material: Material, policy: ShortIdPolicy) -> Result<Self> {
        Ok(Self {
            cas_no: format_cas_number(material.cas_id, policy)?,
            cas_id: material.cas_id,
            chem_name: material.name,
        })
    }
}
