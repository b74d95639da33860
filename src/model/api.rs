//! The JSON response envelope shared by every endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::model::page::PageMeta;

/// Uniform response envelope.
///
/// Every endpoint, success or failure, responds with this shape:
/// `{ success, message, code, data?, meta?, error? }` where `code` mirrors
/// the HTTP status code. `meta` is present only on paginated list responses
/// and `error` only on failures.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK with a data payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::OK, message, Some(data), None)
    }

    /// 200 OK with a data payload and pagination metadata.
    pub fn ok_paged(message: impl Into<String>, data: T, meta: PageMeta) -> Self {
        Self::success(StatusCode::OK, message, Some(data), Some(meta))
    }

    /// 201 Created with a data payload.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::CREATED, message, Some(data), None)
    }

    /// 200 OK without a data payload (delete/update acknowledgements).
    pub fn message(message: impl Into<String>) -> Self {
        Self::success(StatusCode::OK, message, None, None)
    }

    /// Failure envelope for the given status.
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            message: message.clone(),
            code: status.as_u16(),
            data: None,
            meta: None,
            error: Some(message),
        }
    }

    fn success(
        status: StatusCode,
        message: impl Into<String>,
        data: Option<T>,
        meta: Option<PageMeta>,
    ) -> Self {
        Self {
            success: true,
            message: message.into(),
            code: status.as_u16(),
            data,
            meta,
            error: None,
        }
    }
}

/// Failure envelope shape, for OpenAPI documentation only.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
    pub code: u16,
    pub error: String,
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
