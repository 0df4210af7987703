// src/shared/api/extractor_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, PathConfig, QueryConfig};
use tracing::warn;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        warn!("failed to bind request body: {}", err);
        actix_web::error::InternalError::from_response(err, ApiResponse::bad_request("bad request"))
            .into()
    })
}

pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        warn!("failed to bind path parameter: {}", err);
        actix_web::error::InternalError::from_response(err, ApiResponse::bad_request("invalid id"))
            .into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        warn!("failed to bind query string: {}", err);
        actix_web::error::InternalError::from_response(err, ApiResponse::bad_request("Bad Request"))
            .into()
    })
}
