use crate::views;
use axum::response::Html;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Home page", body = String, content_type = "text/html")
    )
)]
pub async fn home_handler() -> Html<String> {
    Html(views::home_page())
}
