//! # elif-model: Record introspection for the elif.rs data layer
//!
//! Wraps application-defined record types, single or many, so the mapping
//! engine can treat them uniformly: resolve the storage table name, read and
//! assign primary keys, stamp creation and update times, and walk a
//! collection record by record.
//!
//! Record types opt in by implementing [`Record`] with a field registration
//! table; the [`Model`] wrapper does the rest.

pub mod cache;
pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod naming;


// Re-export core traits and types
pub use cache::TableNameCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ModelConfig;
pub use context::ModelContext;
pub use error::*;
pub use model::*;
pub use naming::{pluralize, singularize, tableize};
