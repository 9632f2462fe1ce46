//! Suitebox DB - Database abstractions
//!
//! SQLx-based persistence layer for Suitebox services: async repository
//! traits, PostgreSQL implementations, and the in-memory parcel store used
//! by the standalone forwarding model.
//!
//! # Example
//!
//! ```rust,ignore
//! use suitebox_db::{create_pool, Repositories};
//!
//! let pool = create_pool("postgres://localhost/suitebox").await?;
//! let repos = Repositories::new(pool);
//!
//! let packages = repos.packages.find_for_user(&ids, user_id).await?;
//! ```

pub mod error;
pub mod mem;
pub mod models;
pub mod pg;
pub mod pool;
pub mod repo;

pub use error::{DbError, DbResult};
pub use mem::MemoryParcelRepository;
pub use models::*;
pub use pg::Repositories;
pub use pool::{create_pool, DbPool};
pub use repo::*;
