use actix_web::{HttpResponse, ResponseError};
use blob_store::errors::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("blob not found")]
    NotFound,

    #[error("storage fault: {0}")]
    Storage(#[source] std::io::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
            StoreError::Io(err) => ApiError::Storage(err),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound => HttpResponse::NotFound().finish(),
            ApiError::Storage(err) => {
                tracing::error!("storage fault: {}", err);
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}
