// Adapters layer: concrete implementations for external systems (catalogs, storage).

pub mod catalog;
pub mod storage;
