use async_trait::async_trait;

use crate::errors::ServiceError;

use super::domain::{Dealership, NewDealership, PlanCatalog, PlanKind};

/// Result of a dealership listing.
#[derive(Clone, Debug, PartialEq)]
pub struct DealershipMatches {
    pub dealerships: Vec<Dealership>,
    /// A zip was given but matched nothing, so the whole table was returned.
    pub fell_back: bool,
}

/// Trait abstraction for the directory tables.
/// Reads never fail; writes fail only on their own validation.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// All dealerships, or those whose zip equals `zip` exactly. An empty or
    /// absent zip lists everything, and so does a zip with no matches.
    async fn list_dealerships(&self, zip: Option<&str>) -> DealershipMatches;
    async fn list_plans(&self) -> PlanCatalog;
    /// Returns the category's length after the append.
    async fn add_plan(&self, kind: PlanKind, plan: serde_json::Value) -> Result<usize, ServiceError>;
    /// Returns the assigned id.
    async fn add_dealership(&self, input: NewDealership) -> Result<String, ServiceError>;
}
