//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{cat_handler, health_handler};
use crate::domain::{Cat, CatInput};
use crate::types::MessageResponse;

/// OpenAPI documentation for the Cats API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cats API",
        version = "0.1.0",
        description = "Create, read, update and delete cat records",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        health_handler::root,
        health_handler::health,
        cat_handler::create_cat,
        cat_handler::list_cats,
        cat_handler::get_cat,
        cat_handler::update_cat,
        cat_handler::delete_cat,
    ),
    components(
        schemas(
            Cat,
            CatInput,
            MessageResponse,
            health_handler::HealthResponse,
            health_handler::ReadinessResponse,
            health_handler::ServiceStatus,
        )
    ),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Cats", description = "Cat record management")
    )
)]
pub struct ApiDoc;
