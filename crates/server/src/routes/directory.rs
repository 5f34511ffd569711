use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use service::directory::{Dealership, NewDealership, PlanCatalog, PlanKind};
use tracing::info;
use utoipa::ToSchema;

use crate::errors::ApiError;
use crate::metrics;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct AddPlanResponse {
    pub ok: bool,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct AddDealershipResponse {
    pub ok: bool,
    pub id: String,
}

/// First `zip` in the query string. Repeats are ignored rather than rejected.
fn first_zip(params: &[(String, String)]) -> Option<&str> {
    params.iter().find(|(k, _)| k == "zip").map(|(_, v)| v.as_str())
}

/// Parse a POST body as a JSON object, whatever the `Content-Type` says.
fn json_object(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ApiError::MalformedBody(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
        Err(e) => Err(ApiError::MalformedBody(e.to_string())),
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[utoipa::path(
    get,
    path = "/dealerships",
    tag = "dealerships",
    params(("zip" = Option<String>, Query, description = "Exact zip code; when nothing matches the full list is returned. Only the first occurrence is used")),
    responses((status = 200, description = "Dealerships", body = [crate::openapi::DealershipDoc]))
)]
pub async fn list_dealerships(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<Dealership>> {
    let listing = state.store.list_dealerships(first_zip(&params)).await;
    if listing.fell_back {
        metrics::ZIP_FALLBACK_TOTAL.inc();
    }
    Json(listing.dealerships)
}

#[utoipa::path(
    get,
    path = "/plans",
    tag = "plans",
    responses((status = 200, description = "Plans grouped by category", body = crate::openapi::PlanCatalogDoc))
)]
pub async fn list_plans(State(state): State<AppState>) -> Json<PlanCatalog> {
    Json(state.store.list_plans().await)
}

#[utoipa::path(
    post,
    path = "/plans",
    tag = "plans",
    request_body = crate::openapi::AddPlanRequestDoc,
    responses(
        (status = 200, description = "Plan appended", body = AddPlanResponse),
        (status = 400, description = "Unknown kind, or a body that is not a JSON object (invalid JSON, null, arrays, scalars)", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn add_plan(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AddPlanResponse>, ApiError> {
    let mut body = json_object(&body)?;
    let kind = PlanKind::from_value(body.get("kind"))?;
    let plan = body.remove("plan").unwrap_or(Value::Null);
    let count = state.store.add_plan(kind, plan).await?;
    metrics::PLANS_CREATED_TOTAL.with_label_values(&[kind.as_str()]).inc();
    info!(%kind, count, "plan added");
    Ok(Json(AddPlanResponse { ok: true, count }))
}

#[utoipa::path(
    post,
    path = "/dealerships",
    tag = "dealerships",
    request_body = crate::openapi::AddDealershipRequestDoc,
    responses(
        (status = 200, description = "Dealership created", body = AddDealershipResponse),
        (status = 400, description = "Missing fields, or a body that is not a JSON object (invalid JSON, null, arrays, scalars)", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn add_dealership(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AddDealershipResponse>, ApiError> {
    let input = NewDealership::try_from(json_object(&body)?)?;
    let id = state.store.add_dealership(input).await?;
    metrics::DEALERSHIPS_CREATED_TOTAL.inc();
    info!(%id, "dealership added");
    Ok(Json(AddDealershipResponse { ok: true, id }))
}
