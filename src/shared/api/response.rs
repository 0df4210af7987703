// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"message": "..."}` envelope shared by every non-data response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    pub message: String,
}

impl ApiResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn success() -> HttpResponse {
        Self::with_status(StatusCode::OK, "success")
    }

    pub fn data<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn with_status(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(Self::new(message))
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::with_status(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }
}
