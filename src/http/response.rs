//! Error-to-response mapping.
//!
//! Failures are written as plaintext with no catalog body. Upstream
//! unavailability maps to 502, everything else to 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::catalog::CatalogError;
use crate::upstream::Upstream;

pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";
pub const AUTHORS_FETCH_MESSAGE: &str = "Error al obtener autores";
pub const BOOKS_FETCH_MESSAGE: &str = "Error al obtener libros";

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Upstream(e) if e.is_gateway_failure() => StatusCode::BAD_GATEWAY,
            CatalogError::NotConfigured | CatalogError::Upstream(_) | CatalogError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message. Internal details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            CatalogError::NotConfigured => self.to_string(),
            CatalogError::Upstream(e) if e.is_gateway_failure() => match e.upstream() {
                Upstream::Authors => AUTHORS_FETCH_MESSAGE.to_string(),
                Upstream::Books => BOOKS_FETCH_MESSAGE.to_string(),
            },
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        (self.status_code(), self.public_message()).into_response()
    }
}
