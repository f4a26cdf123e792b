use axum::response::Html;

use crate::views;

/// # GET /
pub async fn index() -> Html<String> {
    Html(views::home::page())
}
