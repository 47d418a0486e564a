use crate::domain::FruitForm;
use crate::transport::http::errors::AppError;
use crate::transport::http::types::AppState;
use crate::views;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

/// Where every write sends the browser afterwards.
pub const INDEX_PATH: &str = "/fruits";

/// `302 Found` back to the list page.
fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, INDEX_PATH)]).into_response()
}

#[utoipa::path(
    get,
    path = "/fruits",
    responses(
        (status = 200, description = "List of all fruits", body = String, content_type = "text/html"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let fruits = state.fruit_service.list_all().await?;
    Ok(Html(views::index_page(&fruits)))
}

#[utoipa::path(
    post,
    path = "/fruits",
    request_body(content = FruitForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Created, redirects to /fruits"),
        (status = 500, description = "Store unavailable")
    )
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    // The content type is not checked; anything undecodable is an empty form.
    let form = FruitForm::from_urlencoded(&body);
    state.fruit_service.create(form).await?;
    Ok(redirect_to_index())
}

#[utoipa::path(
    get,
    path = "/fruits/new",
    responses(
        (status = 200, description = "Empty fruit form", body = String, content_type = "text/html")
    )
)]
pub async fn new_handler() -> Html<String> {
    Html(views::new_page())
}

#[utoipa::path(
    get,
    path = "/fruits/{id}",
    params(
        ("id" = String, Path, description = "Fruit id")
    ),
    responses(
        (status = 200, description = "Fruit detail page", body = String, content_type = "text/html"),
        (status = 404, description = "No fruit with this id"),
        (status = 500, description = "Malformed id or store unavailable")
    )
)]
pub async fn show_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let fruit = state.fruit_service.get_by_id(&id).await?;
    Ok(Html(views::show_page(&fruit)))
}

#[utoipa::path(
    get,
    path = "/fruits/{id}/edit",
    params(
        ("id" = String, Path, description = "Fruit id")
    ),
    responses(
        (status = 200, description = "Pre-filled edit form", body = String, content_type = "text/html"),
        (status = 404, description = "No fruit with this id"),
        (status = 500, description = "Malformed id or store unavailable")
    )
)]
pub async fn edit_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let fruit = state.fruit_service.get_by_id(&id).await?;
    Ok(Html(views::edit_page(&fruit)))
}

#[utoipa::path(
    put,
    path = "/fruits/{id}",
    params(
        ("id" = String, Path, description = "Fruit id")
    ),
    request_body(content = FruitForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Updated (or absent), redirects to /fruits"),
        (status = 500, description = "Malformed id or store unavailable")
    )
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, AppError> {
    // The content type is not checked; anything undecodable is an empty form.
    let form = FruitForm::from_urlencoded(&body);
    state.fruit_service.update_by_id(&id, form).await?;
    Ok(redirect_to_index())
}

#[utoipa::path(
    delete,
    path = "/fruits/{id}",
    params(
        ("id" = String, Path, description = "Fruit id")
    ),
    responses(
        (status = 302, description = "Deleted (or already gone), redirects to /fruits"),
        (status = 500, description = "Malformed id or store unavailable")
    )
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    state.fruit_service.delete_by_id(&id).await?;
    Ok(redirect_to_index())
}
