use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use tracing::{debug, info};

use storekeep_core::{validation, Money, NewSale};
use storekeep_db::DbError;

use crate::{error::AppError, forms::SaleForm, views, AppState};

const LISTING: &str = "/sales";

/// # GET /sales
/// Lists sales and fills the customer and item pickers.
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let sales = state.db.sales().list().await?;
    let customers = state.db.customers().list().await?;
    let items = state.db.items().list().await?;
    Ok(Html(views::sales::page(&sales, &customers, &items)))
}

/// # POST /add_sale
/// Prices the sale from the item's current price and records it. Stock is
/// not checked. An unknown item sells at 0.00. A sale whose total or new
/// stock would not fit in 64 bits is skipped.
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<SaleForm>,
) -> Result<Redirect, AppError> {
    let ids = validation::parse_id("customer_id", form.customer_id.as_deref()).and_then(
        |customer_id| {
            validation::parse_id("item_id", form.item_id.as_deref())
                .map(|item_id| (customer_id, item_id))
        },
    );

    let (customer_id, item_id) = match ids {
        Ok(ids) => ids,
        Err(e) => {
            debug!(error = %e, "Sale not recorded");
            return Ok(Redirect::to(LISTING));
        }
    };

    let quantity = validation::parse_quantity(form.quantity.as_deref());

    let unit_price = match state.db.items().get_by_id(item_id).await? {
        Some(item) => item.price(),
        None => {
            debug!(item_id, "Sold item not found, pricing at zero");
            Money::zero()
        }
    };

    let sale = match NewSale::priced(customer_id, item_id, quantity, unit_price) {
        Ok(sale) => sale,
        Err(e) => {
            debug!(error = %e, item_id, quantity, "Sale not recorded");
            return Ok(Redirect::to(LISTING));
        }
    };

    match state.db.sales().record(&sale).await {
        Ok(id) => info!(id, item_id, quantity, total = %sale.total(), "Sale recorded"),
        Err(e @ DbError::StockOutOfRange { .. }) => debug!(error = %e, "Sale not recorded"),
        Err(e) => return Err(e.into()),
    }

    Ok(Redirect::to(LISTING))
}

/// # GET /delete_sale/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    if state.db.sales().delete(id).await? {
        info!(id, "Sale deleted");
    }
    Ok(Redirect::to(LISTING))
}
