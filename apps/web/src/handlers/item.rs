use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use tracing::{debug, info};

use storekeep_core::validation;

use crate::{error::AppError, forms::ItemForm, views, AppState};

const LISTING: &str = "/items";

/// # GET /items
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let items = state.db.items().list().await?;
    Ok(Html(views::items::page(&items)))
}

/// # POST /add_item
/// Unparseable stock and price fall back to zero; only a blank name skips
/// the insert.
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> Result<Redirect, AppError> {
    match validation::validate_item(
        form.name.as_deref(),
        form.stock.as_deref(),
        form.price.as_deref(),
    ) {
        Ok(item) => {
            let id = state.db.items().insert(&item).await?;
            info!(id, name = %item.name, "Item added");
        }
        Err(e) => debug!(error = %e, "Item not added"),
    }

    Ok(Redirect::to(LISTING))
}

/// # GET /delete_item/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    if state.db.items().delete(id).await? {
        info!(id, "Item deleted");
    }
    Ok(Redirect::to(LISTING))
}
