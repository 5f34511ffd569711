use utoipa::OpenApi;
use utoipa::ToSchema;

use crate::routes::directory::{AddDealershipResponse, AddPlanResponse};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorResponseDoc { pub error: String }

/// Stored dealership. Extra keys from the creation body are echoed back as well.
#[derive(ToSchema)]
pub struct DealershipDoc { pub id: String, pub name: String, pub zip: String, pub address: String }

/// Plans are free-form; these two keys are conventional, the rest depends on the category.
#[derive(ToSchema)]
pub struct PlanDoc { pub id: String, pub name: String }

#[derive(ToSchema)]
pub struct PlanCatalogDoc { pub finance: Vec<PlanDoc>, pub lease: Vec<PlanDoc>, pub offers: Vec<PlanDoc> }

/// `kind` is one of `finance`, `lease`, `offers`.
#[derive(ToSchema)]
pub struct AddPlanRequestDoc { pub kind: String, pub plan: PlanDoc }

#[derive(ToSchema)]
pub struct AddDealershipRequestDoc { pub name: String, pub zip: String, pub address: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::directory::list_dealerships,
        crate::routes::directory::add_dealership,
        crate::routes::directory::list_plans,
        crate::routes::directory::add_plan,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponseDoc,
            DealershipDoc,
            PlanDoc,
            PlanCatalogDoc,
            AddPlanRequestDoc,
            AddDealershipRequestDoc,
            AddPlanResponse,
            AddDealershipResponse,
        )
    ),
    tags(
        (name = "health"),
        (name = "dealerships"),
        (name = "plans")
    )
)]
pub struct ApiDoc;
