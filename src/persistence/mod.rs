//! Persistence layer: the registration collection.
//!
//! [`RegistrationStore`] is the only durable state in the system. It
//! supports two operations, insert and full scan ordered by registration
//! date descending; all filtering and grouping happens in memory.

pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;

use crate::domain::{NewRegistration, Registration};
use crate::error::PortalError;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

/// Remote collection of registration records.
#[async_trait]
pub trait RegistrationStore: Send + Sync + std::fmt::Debug {
    /// Inserts one record, returning it with its assigned id and date.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Persistence`] if the store rejects the write.
    async fn insert(&self, record: NewRegistration) -> Result<Registration, PortalError>;

    /// Returns every record, newest registration first.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Persistence`] if the store cannot be read.
    async fn select_all(&self) -> Result<Vec<Registration>, PortalError>;
}
