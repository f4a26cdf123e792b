use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use tracing::{debug, info};

use storekeep_core::validation;

use crate::{error::AppError, forms::DueForm, views, AppState};

const LISTING: &str = "/due";

/// # GET /due
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let dues = state.db.dues().list().await?;
    let customers = state.db.customers().list().await?;
    Ok(Html(views::dues::page(&dues, &customers)))
}

/// # POST /add_due
/// Needs a customer id and an amount above zero.
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<DueForm>,
) -> Result<Redirect, AppError> {
    match validation::validate_due(form.customer_id.as_deref(), form.amount.as_deref()) {
        Ok(due) => {
            let id = state.db.dues().insert(&due).await?;
            info!(id, customer_id = due.customer_id, amount = %due.amount(), "Due added");
        }
        Err(e) => debug!(error = %e, "Due not added"),
    }

    Ok(Redirect::to(LISTING))
}

/// # GET /delete_due/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    if state.db.dues().delete(id).await? {
        info!(id, "Due deleted");
    }
    Ok(Redirect::to(LISTING))
}
