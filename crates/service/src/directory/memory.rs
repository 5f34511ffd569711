use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;

use super::domain::{Dealership, NewDealership, PlanCatalog, PlanKind};
use super::seed;
use super::store::{DealershipMatches, DirectoryStore};

struct Tables {
    dealerships: Vec<Dealership>,
    plans: PlanCatalog,
    /// Sequence number for the next `d<k>` id. Only advanced under the write lock.
    next_dealership_seq: u64,
}

/// Process-lifetime directory held in memory.
///
/// Both tables sit behind one lock, so an append and its id assignment are a
/// single critical section.
pub struct InMemoryDirectory {
    inner: RwLock<Tables>,
}

impl InMemoryDirectory {
    /// Build a store from explicit contents. Ids continue after the current row count.
    pub fn new(dealerships: Vec<Dealership>, plans: PlanCatalog) -> Arc<Self> {
        let next_dealership_seq = dealerships.len() as u64 + 1;
        Arc::new(Self {
            inner: RwLock::new(Tables { dealerships, plans, next_dealership_seq }),
        })
    }

    /// Store preloaded with the three seed dealerships and one plan per category.
    pub fn seeded() -> Arc<Self> {
        Self::new(seed::dealerships(), seed::plans())
    }

    pub async fn dealership_count(&self) -> usize {
        self.inner.read().await.dealerships.len()
    }

    pub async fn list_dealerships(&self, zip: Option<&str>) -> DealershipMatches {
        let tables = self.inner.read().await;
        let all = &tables.dealerships;
        let zip = match zip {
            Some(z) if !z.is_empty() => z,
            _ => return DealershipMatches { dealerships: all.clone(), fell_back: false },
        };
        let matches: Vec<Dealership> = all.iter().filter(|d| d.zip_matches(zip)).cloned().collect();
        if matches.is_empty() {
            debug!(%zip, "no dealership matched zip; returning full table");
            DealershipMatches { dealerships: all.clone(), fell_back: true }
        } else {
            DealershipMatches { dealerships: matches, fell_back: false }
        }
    }

    pub async fn list_plans(&self) -> PlanCatalog {
        self.inner.read().await.plans.clone()
    }

    pub async fn add_plan(&self, kind: PlanKind, plan: Value) -> Result<usize, ServiceError> {
        let mut tables = self.inner.write().await;
        Ok(tables.plans.push(kind, plan))
    }

    pub async fn add_dealership(&self, input: NewDealership) -> Result<String, ServiceError> {
        let mut tables = self.inner.write().await;
        let id = format!("d{}", tables.next_dealership_seq);
        tables.next_dealership_seq += 1;
        tables.dealerships.push(input.into_dealership(id.clone()));
        Ok(id)
    }
}

#[async_trait::async_trait]
impl DirectoryStore for InMemoryDirectory {
    async fn list_dealerships(&self, zip: Option<&str>) -> DealershipMatches {
        self.list_dealerships(zip).await
    }

    async fn list_plans(&self) -> PlanCatalog {
        self.list_plans().await
    }

    async fn add_plan(&self, kind: PlanKind, plan: Value) -> Result<usize, ServiceError> {
        self.add_plan(kind, plan).await
    }

    async fn add_dealership(&self, input: NewDealership) -> Result<String, ServiceError> {
        self.add_dealership(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn new_dealership(name: &str, zip: &str) -> NewDealership {
        NewDealership {
            name: json!(name),
            zip: json!(zip),
            address: json!("1 Test St"),
            extra: Map::new(),
        }
    }

    #[tokio::test]
    async fn seeded_store_lists_seed_rows_in_order() {
        let store = InMemoryDirectory::seeded();
        let listing = store.list_dealerships(None).await;
        let ids: Vec<&str> = listing.dealerships.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["d1", "d2", "d3"]);
        assert!(!listing.fell_back);

        let plans = store.list_plans().await;
        for kind in PlanKind::ALL {
            assert_eq!(plans.get(kind).len(), 1);
        }
    }

    #[tokio::test]
    async fn zip_filter_is_exact_with_fallback() {
        let store = InMemoryDirectory::seeded();

        let hit = store.list_dealerships(Some("98004")).await;
        assert_eq!(hit.dealerships.len(), 1);
        assert_eq!(hit.dealerships[0].id, "d2");
        assert!(!hit.fell_back);

        let all = store.list_dealerships(None).await.dealerships;
        let miss = store.list_dealerships(Some("00000")).await;
        assert!(miss.fell_back);
        assert_eq!(miss.dealerships, all);

        // prefix is not a match
        assert!(store.list_dealerships(Some("9800")).await.fell_back);

        let empty = store.list_dealerships(Some("")).await;
        assert!(!empty.fell_back);
        assert_eq!(empty.dealerships, all);
    }

    #[tokio::test]
    async fn zip_filter_returns_every_match() {
        let store = InMemoryDirectory::seeded();
        store.add_dealership(new_dealership("Second Bellevue", "98004")).await.unwrap();
        let hit = store.list_dealerships(Some("98004")).await.dealerships;
        let ids: Vec<&str> = hit.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["d2", "d4"]);
    }

    #[tokio::test]
    async fn reads_are_idempotent() {
        let store = InMemoryDirectory::seeded();
        assert_eq!(store.list_dealerships(Some("98101")).await, store.list_dealerships(Some("98101")).await);
        assert_eq!(store.list_plans().await, store.list_plans().await);
    }

    #[tokio::test]
    async fn add_plan_appends_in_call_order() {
        let store = InMemoryDirectory::seeded();
        let before = store.list_plans().await;
        for i in 0..3 {
            let count = store.add_plan(PlanKind::Finance, json!({"id": format!("f{}", i + 2)})).await.unwrap();
            assert_eq!(count, before.finance.len() + i + 1);
        }
        let after = store.list_plans().await;
        assert_eq!(after.finance.len(), before.finance.len() + 3);
        assert_eq!(&after.finance[..1], &before.finance[..]);
        let tail: Vec<&Value> = after.finance[1..].iter().map(|p| &p["id"]).collect();
        assert_eq!(tail, [&json!("f2"), &json!("f3"), &json!("f4")]);
        assert_eq!(after.lease, before.lease);
        assert_eq!(after.offers, before.offers);
    }

    #[tokio::test]
    async fn add_plan_accepts_any_shape() {
        let store = InMemoryDirectory::seeded();
        assert_eq!(store.add_plan(PlanKind::Lease, Value::Null).await.unwrap(), 2);
        assert_eq!(store.add_plan(PlanKind::Lease, json!([1, 2])).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn sequential_ids_increase() {
        let store = InMemoryDirectory::seeded();
        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(store.add_dealership(new_dealership(&format!("D{i}"), "98033")).await.unwrap());
        }
        assert_eq!(ids, ["d4", "d5", "d6", "d7", "d8"]);
        assert_eq!(store.dealership_count().await, 8);
    }

    #[tokio::test]
    async fn empty_store_starts_at_d1() {
        let store = InMemoryDirectory::new(Vec::new(), PlanCatalog::default());
        assert_eq!(store.add_dealership(new_dealership("A", "1")).await.unwrap(), "d1");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_ids_are_distinct() -> anyhow::Result<()> {
        let store = InMemoryDirectory::seeded();
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.add_dealership(new_dealership(&format!("D{i}"), "98033")).await
            }));
        }
        let mut ids = std::collections::HashSet::new();
        for h in handles {
            assert!(ids.insert(h.await??));
        }
        assert_eq!(ids.len(), 32);
        assert_eq!(store.dealership_count().await, 35);
        Ok(())
    }

    #[tokio::test]
    async fn works_through_trait_object() {
        let store: Arc<dyn DirectoryStore> = InMemoryDirectory::seeded();
        let id = store.add_dealership(new_dealership("Kirkland Toyota", "98033")).await.unwrap();
        assert_eq!(id, "d4");
        let hit = store.list_dealerships(Some("98033")).await.dealerships;
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].name, json!("Kirkland Toyota"));
    }
}
