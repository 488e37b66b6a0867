// Infrastructure layer modules
pub mod config;
pub mod contact_repository;
pub mod logging;

// Re-exports
pub use config::{ContactTableConfig, CONTACTS_TABLE_ENV, DEFAULT_CONTACTS_TABLE};
pub use contact_repository::{ContactRepository, DynamoContactRepository, RepositoryError};
#[cfg(test)]
pub use logging::init_test_logging;
pub use logging::init_logging;
