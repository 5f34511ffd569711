//! Dealership and plan tables.

pub mod domain;
pub mod memory;
pub mod seed;
pub mod store;

pub use domain::{Dealership, NewDealership, PlanCatalog, PlanKind};
pub use memory::InMemoryDirectory;
pub use store::{DealershipMatches, DirectoryStore};
