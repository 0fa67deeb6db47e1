use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::api_response::ApiResponse;

#[derive(Error, Debug)]
pub enum CustomError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Explorer returned HTTP {status} for {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Failed to decode explorer response: {0}")]
    DecodeError(String),

    #[error("Invalid address: {0}")]
    InvalidAddressError(String),

    #[error("Unsupported chain: {0}")]
    UnsupportedChainError(u64),

    #[error("Token {0} not found.")]
    UnknownTokenError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    ValidationError(String),
}

impl From<reqwest::Error> for CustomError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CustomError::DecodeError(err.to_string())
        } else {
            CustomError::NetworkError(err.to_string())
        }
    }
}

// Custom Error type
#[derive(Debug, Serialize)]
pub struct ApiError {
    code: u16,
    message: String,
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomError::InvalidAddressError(_) => StatusCode::BAD_REQUEST,
            CustomError::ValidationError(_) => StatusCode::BAD_REQUEST,
            CustomError::UnsupportedChainError(_) => StatusCode::BAD_REQUEST,
            CustomError::UnknownTokenError(_) => StatusCode::NOT_FOUND,
            CustomError::NetworkError(_) => StatusCode::BAD_GATEWAY,
            CustomError::HttpStatusError { .. } => StatusCode::BAD_GATEWAY,
            CustomError::DecodeError(_) => StatusCode::BAD_GATEWAY,
            CustomError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let api_error = ApiError {
            code: status.as_u16(),
            message: self.to_string(),
        };

        HttpResponse::build(status).json(ApiResponse {
            status: "FAILURE".to_string(),
            code: api_error.code,
            result: None::<()>,
            error: Some(api_error),
        })
    }
}
