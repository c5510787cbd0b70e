//! Storefront engine: catalog client and background fetch execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_categories, decode_products, CategoryRecord, DecodeError, ProductRecord};
pub use engine::EngineHandle;
pub use fetch::{CatalogFetcher, FetchSettings, ReqwestCatalogFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, RequestId};
