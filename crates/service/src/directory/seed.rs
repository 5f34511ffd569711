//! Records present at process start.

use serde_json::{json, Map, Value};

use super::domain::{Dealership, PlanCatalog};

fn dealership(id: &str, name: &str, zip: &str, address: &str) -> Dealership {
    Dealership {
        id: id.into(),
        name: Value::from(name),
        zip: Value::from(zip),
        address: Value::from(address),
        extra: Map::new(),
    }
}

pub fn dealerships() -> Vec<Dealership> {
    vec![
        dealership("d1", "Seattle Toyota", "98101", "123 Pine St, Seattle, WA"),
        dealership("d2", "Bellevue Toyota", "98004", "456 Main St, Bellevue, WA"),
        dealership("d3", "Redmond Toyota", "98052", "789 161st Ave NE, Redmond, WA"),
    ]
}

pub fn plans() -> PlanCatalog {
    PlanCatalog {
        finance: vec![json!({
            "id": "f1",
            "name": "Standard 60",
            "apr": 3.9,
            "terms": [24, 36, 48, 60, 72]
        })],
        lease: vec![json!({
            "id": "l1",
            "name": "Popular 36",
            "money_factor": 0.00125,
            "terms": [24, 36, 48, 60],
            "mileage": [10000, 12000, 15000]
        })],
        offers: vec![json!({
            "id": "o1",
            "name": "College or Military",
            "amount": 500
        })],
    }
}
