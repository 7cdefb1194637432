//! Persistence adapters.
//!
//! The database itself is an external collaborator; the in-process store
//! below implements the repository ports with the same observable contract
//! (unique usernames, cascade delete) a relational backend would enforce.

pub mod memory;

pub use memory::MemoryStore;
