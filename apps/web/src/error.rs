//! Error types for the HTTP layer.
//!
//! Only infrastructure failures get here. Rejected form input never does:
//! handlers log it and redirect.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use storekeep_db::DbError;

use crate::views;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}

/// Converts `AppError` into a generic 500 page. Details go to the log only.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(views::error_page("Something went wrong. Please try again.")),
        )
            .into_response()
    }
}
