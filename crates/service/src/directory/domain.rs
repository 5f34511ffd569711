use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::ServiceError;

/// Keys a dealership creation body must carry. Values are not type-checked.
pub const REQUIRED_DEALERSHIP_FIELDS: [&str; 3] = ["name", "zip", "address"];

/// A dealership location.
///
/// `name`, `zip` and `address` hold whatever JSON the creator sent; the seed
/// rows use strings. Any other keys from the creation body ride along in `extra`
/// and are returned by listings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Dealership {
    pub id: String,
    pub name: Value,
    pub zip: Value,
    pub address: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dealership {
    /// Exact string comparison; a non-string `zip` never matches.
    pub fn zip_matches(&self, zip: &str) -> bool {
        self.zip.as_str() == Some(zip)
    }
}

/// Creation input: a dealership body that passed the presence check.
#[derive(Clone, Debug, PartialEq)]
pub struct NewDealership {
    pub name: Value,
    pub zip: Value,
    pub address: Value,
    pub extra: Map<String, Value>,
}

impl NewDealership {
    pub fn into_dealership(self, id: String) -> Dealership {
        Dealership {
            id,
            name: self.name,
            zip: self.zip,
            address: self.address,
            extra: self.extra,
        }
    }
}

impl TryFrom<Map<String, Value>> for NewDealership {
    type Error = ServiceError;

    /// Checks presence of every required key. A caller-supplied `id` is dropped
    /// since the store assigns its own.
    fn try_from(mut body: Map<String, Value>) -> Result<Self, Self::Error> {
        let missing: Vec<String> = REQUIRED_DEALERSHIP_FIELDS
            .iter()
            .filter(|k| !body.contains_key(**k))
            .map(|k| k.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ServiceError::MissingFields(missing));
        }
        let mut take = |k: &str| body.remove(k).unwrap_or(Value::Null);
        let name = take("name");
        let zip = take("zip");
        let address = take("address");
        body.remove("id");
        Ok(Self { name, zip, address, extra: body })
    }
}

/// Plan category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    Finance,
    Lease,
    Offers,
}

impl PlanKind {
    pub const ALL: [PlanKind; 3] = [PlanKind::Finance, PlanKind::Lease, PlanKind::Offers];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKind::Finance => "finance",
            PlanKind::Lease => "lease",
            PlanKind::Offers => "offers",
        }
    }

    /// Reads `kind` out of a raw request value. Anything other than one of the
    /// three category strings is an `InvalidCategory`.
    pub fn from_value(v: Option<&Value>) -> Result<Self, ServiceError> {
        match v {
            Some(Value::String(s)) => s.parse(),
            Some(other) => Err(ServiceError::InvalidCategory(other.to_string())),
            None => Err(ServiceError::InvalidCategory("<absent>".into())),
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanKind {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "finance" => Ok(PlanKind::Finance),
            "lease" => Ok(PlanKind::Lease),
            "offers" => Ok(PlanKind::Offers),
            other => Err(ServiceError::InvalidCategory(other.to_string())),
        }
    }
}

/// All plans, grouped by category. Records are kept as raw JSON.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PlanCatalog {
    pub finance: Vec<Value>,
    pub lease: Vec<Value>,
    pub offers: Vec<Value>,
}

impl PlanCatalog {
    pub fn get(&self, kind: PlanKind) -> &[Value] {
        match kind {
            PlanKind::Finance => &self.finance,
            PlanKind::Lease => &self.lease,
            PlanKind::Offers => &self.offers,
        }
    }

    fn get_mut(&mut self, kind: PlanKind) -> &mut Vec<Value> {
        match kind {
            PlanKind::Finance => &mut self.finance,
            PlanKind::Lease => &mut self.lease,
            PlanKind::Offers => &mut self.offers,
        }
    }

    /// Appends to `kind` and returns that category's new length.
    pub fn push(&mut self, kind: PlanKind, plan: Value) -> usize {
        let plans = self.get_mut(kind);
        plans.push(plan);
        plans.len()
    }
}
