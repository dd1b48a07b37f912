//! In-memory storage backend.
//!
//! Implements every repository trait over HashMaps wrapped in `Arc<RwLock<_>>`.
//! Snapshot imports go through [`InMemoryRepository::import_catalog`], which
//! stores records without validation.
//!
//! # Example
//!
//! ```rust,ignore
//! use syllabus::storage::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! repo.import_catalog(catalog).await;
//! ```

mod repository;

pub use repository::InMemoryRepository;
