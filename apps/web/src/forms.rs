//! Form bodies posted by the store pages.
//!
//! Every field is optional so that a missing input never rejects the
//! request at extraction time. Interpretation happens in
//! `storekeep_core::validation`.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct CustomerForm {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemForm {
    pub name: Option<String>,
    pub stock: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SaleForm {
    pub customer_id: Option<String>,
    pub item_id: Option<String>,
    pub quantity: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DueForm {
    pub customer_id: Option<String>,
    pub amount: Option<String>,
}
