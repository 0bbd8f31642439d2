//! Cat handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use axum_extra::extract::WithRejection;

use crate::api::extractors::{ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::config::MSG_CAT_DELETED;
use crate::domain::{Cat, CatInput};
use crate::errors::{AppError, AppResult};
use crate::types::{ListParams, MessageResponse};

/// Create cat routes.
///
/// The collection is served with and without a trailing slash.
pub fn cat_routes() -> Router<AppState> {
    Router::new()
        .route("/cats", get(list_cats).post(create_cat))
        .route("/cats/", get(list_cats).post(create_cat))
        .route("/cats/:id", get(get_cat).put(update_cat).delete(delete_cat))
}

/// Create a cat
#[utoipa::path(
    post,
    path = "/cats/",
    tag = "Cats",
    request_body = CatInput,
    responses(
        (status = 200, description = "Cat created", body = Cat),
        (status = 422, description = "Invalid payload"),
        (status = 500, description = "Store fault")
    )
)]
pub async fn create_cat(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CatInput>,
) -> AppResult<Json<Cat>> {
    let cat = state.cat_service.create_cat(input).await?;
    Ok(Json(cat))
}

/// List cats by offset and limit, ordered by id
#[utoipa::path(
    get,
    path = "/cats/",
    tag = "Cats",
    params(ListParams),
    responses(
        (status = 200, description = "Window of cats", body = Vec<Cat>),
        (status = 422, description = "Invalid query parameters")
    )
)]
pub async fn list_cats(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ListParams>,
) -> AppResult<Json<Vec<Cat>>> {
    let (skip, limit) = params.window();
    let cats = state.cat_service.list_cats(skip, limit).await?;
    Ok(Json(cats))
}

/// Get a cat by ID
#[utoipa::path(
    get,
    path = "/cats/{id}",
    tag = "Cats",
    params(
        ("id" = i32, Path, description = "Cat ID")
    ),
    responses(
        (status = 200, description = "Cat found", body = Cat),
        (status = 404, description = "Cat not found")
    )
)]
pub async fn get_cat(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<Cat>> {
    let cat = state.cat_service.get_cat(id).await?;
    Ok(Json(cat))
}

/// Replace every field of a cat
#[utoipa::path(
    put,
    path = "/cats/{id}",
    tag = "Cats",
    params(
        ("id" = i32, Path, description = "Cat ID")
    ),
    request_body = CatInput,
    responses(
        (status = 200, description = "Cat updated", body = Cat),
        (status = 404, description = "Cat not found"),
        (status = 422, description = "Invalid payload")
    )
)]
pub async fn update_cat(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    ValidatedJson(input): ValidatedJson<CatInput>,
) -> AppResult<Json<Cat>> {
    let cat = state.cat_service.update_cat(id, input).await?;
    Ok(Json(cat))
}

/// Delete a cat
#[utoipa::path(
    delete,
    path = "/cats/{id}",
    tag = "Cats",
    params(
        ("id" = i32, Path, description = "Cat ID")
    ),
    responses(
        (status = 200, description = "Cat deleted", body = MessageResponse),
        (status = 404, description = "Cat not found")
    )
)]
pub async fn delete_cat(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    state.cat_service.delete_cat(id).await?;
    Ok(Json(MessageResponse::new(MSG_CAT_DELETED)))
}
