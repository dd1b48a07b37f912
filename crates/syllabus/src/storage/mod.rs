//! Storage backend implementations of the `syllabus_core::storage` traits.

pub mod inmemory;

pub use inmemory::InMemoryRepository;
