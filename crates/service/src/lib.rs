//! Service layer for the dealer directory.
//! - Domain records for dealerships and plans, and their write-time checks.
//! - The `DirectoryStore` abstraction and its in-memory implementation.
//! - Error types shared with the HTTP layer.

pub mod errors;
pub mod directory;
