pub mod domain;
pub mod errors;
pub mod services;
pub mod store;

pub use errors::{CoreError, EntityKind, Result};
pub use services::CatalogService;
pub use store::{CatalogConfig, CatalogStats, CatalogStore};
