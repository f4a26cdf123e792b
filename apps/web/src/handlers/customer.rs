use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use tracing::{debug, info};

use storekeep_core::validation;

use crate::{error::AppError, forms::CustomerForm, views, AppState};

const LISTING: &str = "/customers";

/// # GET /customers
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let customers = state.db.customers().list().await?;
    Ok(Html(views::customers::page(&customers)))
}

/// # POST /add_customer
/// A blank name skips the insert; the redirect happens either way.
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<CustomerForm>,
) -> Result<Redirect, AppError> {
    match validation::validate_customer(
        form.name.as_deref(),
        form.phone.as_deref(),
        form.email.as_deref(),
    ) {
        Ok(customer) => {
            let id = state.db.customers().insert(&customer).await?;
            info!(id, name = %customer.name, "Customer added");
        }
        Err(e) => debug!(error = %e, "Customer not added"),
    }

    Ok(Redirect::to(LISTING))
}

/// # GET /delete_customer/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    if state.db.customers().delete(id).await? {
        info!(id, "Customer deleted");
    }
    Ok(Redirect::to(LISTING))
}
