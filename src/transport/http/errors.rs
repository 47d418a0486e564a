//! HTTP-facing error type for the page handlers.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::storage::StoreError;
use crate::views;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            // Store outages and malformed ids both surface as a plain 500.
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let page = match status {
            StatusCode::NOT_FOUND => views::not_found_page(),
            _ => {
                eprintln!("> Request failed: {}", self);
                views::server_error_page()
            }
        };
        (status, Html(page)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = AppError::from(StoreError::NotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_identifier_and_outage_map_to_500() {
        let bad_id = AppError::from(StoreError::InvalidIdentifier("x".into()));
        let outage = AppError::from(StoreError::StoreUnavailable("refused".into()));
        assert_eq!(bad_id.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(outage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            outage.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
